mod common;

use common::synthetic_image::{constant_batch, split_sign_image};
use mosaic_viewer::diagnostics::{CaptureSink, NullSink};
use mosaic_viewer::encode::encode;
use mosaic_viewer::image::{ImageBatch, ImageF32};
use mosaic_viewer::layout::{GridLayout, Placement};
use mosaic_viewer::mosaic::{assemble, MosaicOptions, BACKGROUND};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

/// Every sample of the placement rectangle equals `value`.
fn cell_is_constant(canvas: &ImageF32, place: &Placement, value: f32) -> bool {
    (0..place.height).all(|y| {
        canvas.row(place.top + y)[place.left..place.left + place.width]
            .iter()
            .all(|&v| close(v, value))
    })
}

#[test]
fn four_signed_constants_form_a_padded_2x2_canvas() {
    let batch = constant_batch(10, 10, &[1.0, -1.0, 0.5, -0.5]);
    let options = MosaicOptions {
        padding: 1,
        resize_to_fit: false,
        normalize: true,
        ..MosaicOptions::default()
    };
    let canvas = assemble(&batch, &options, &NullSink).unwrap();
    // 2 cells of 10 px per axis plus 3 padding borders
    assert_eq!((canvas.h, canvas.w), (23, 23));

    // per-image normalization maps each constant to +-255
    for (n, expected) in [255.0f32, -255.0, 255.0, -255.0].into_iter().enumerate() {
        let place = Placement::of_cell(n / 2, n % 2, 10, 10, 1);
        assert!(
            cell_is_constant(&canvas, &place, expected),
            "cell {n} should be {expected}"
        );
    }

    // padding rows/columns stay at the background value
    for border in [0, 11, 22] {
        assert!(canvas.row(border).iter().all(|&v| close(v, BACKGROUND)));
        assert!((0..23).all(|y| close(canvas.get(border, y), BACKGROUND)));
    }

    // sign encoding of the canvas: positive cells pure red, negative pure blue
    let rgb = encode(&canvas);
    assert_eq!(rgb.get(1, 1), [0.0, 0.0, 255.0]);
    assert_eq!(rgb.get(12, 1), [255.0, 0.0, 0.0]);
}

#[test]
fn seven_images_leave_one_background_cell() {
    let batch = constant_batch(8, 8, &[10.0; 7]);
    let options = MosaicOptions {
        padding: 2,
        resize_to_fit: false,
        ..MosaicOptions::default()
    };
    let canvas = assemble(&batch, &options, &NullSink).unwrap();

    let layout = GridLayout::plan(7);
    assert_eq!(layout, GridLayout { rows: 2, cols: 4 });
    assert_eq!((canvas.h, canvas.w), (2 * 8 + 3 * 2, 4 * 8 + 5 * 2));

    for n in 0..7 {
        let place = Placement::of_cell(n / 4, n % 4, 8, 8, 2);
        assert!(cell_is_constant(&canvas, &place, 10.0), "cell {n}");
    }
    // cell (1, 3) holds no image and keeps the background everywhere
    let empty = Placement::of_cell(1, 3, 8, 8, 2);
    assert!(cell_is_constant(&canvas, &empty, BACKGROUND));
}

#[test]
fn resized_mosaic_fits_the_desired_height() {
    let batch = constant_batch(20, 20, &[1.0; 9]);
    let options = MosaicOptions {
        padding: 1,
        desired_height: 304,
        resize_to_fit: true,
        ..MosaicOptions::default()
    };
    let canvas = assemble(&batch, &options, &NullSink).unwrap();
    // 3 rows: scale = (304 - 4) / 60 = 5 -> cells 100x100, canvas 304x304
    assert_eq!((canvas.h, canvas.w), (304, 304));
    let place = Placement::of_cell(2, 2, 100, 100, 1);
    assert!(cell_is_constant(&canvas, &place, 1.0));
}

#[test]
fn assembly_does_not_mutate_the_batch() {
    let images = vec![split_sign_image(6, 6, 2.0), split_sign_image(6, 6, 4.0)];
    let batch = ImageBatch::from_images(images.clone()).unwrap();
    let options = MosaicOptions {
        resize_to_fit: false,
        normalize: true,
        ..MosaicOptions::default()
    };
    assemble(&batch, &options, &NullSink).unwrap();
    for (n, img) in images.iter().enumerate() {
        assert_eq!(batch.get(n), img, "image {n} changed during assembly");
    }
}

#[test]
fn undersized_display_height_is_rejected_before_assembly() {
    let batch = constant_batch(28, 28, &[1.0; 9]); // 3x3 grid, 4 borders
    let options = MosaicOptions {
        padding: 10,
        desired_height: 40,
        resize_to_fit: true,
        ..MosaicOptions::default()
    };
    let err = assemble(&batch, &options, &NullSink).unwrap_err();
    assert!(err.contains("Display height"), "unexpected message: {err}");
}

#[test]
fn assembly_reports_its_geometry_to_the_sink() {
    let batch = constant_batch(10, 10, &[0.0; 6]);
    let options = MosaicOptions {
        resize_to_fit: false,
        ..MosaicOptions::default()
    };
    let sink = CaptureSink::new();
    assemble(&batch, &options, &sink).unwrap();
    assert!(
        sink.contains("6 images into a 2x3 grid"),
        "messages: {:?}",
        sink.take()
    );
}
