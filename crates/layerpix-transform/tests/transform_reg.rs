//! Regression tests for geometric transforms across a multi-layer stack

use layerpix_core::{ColorMode, IndexedBuffer, Layer, LayerId, TruecolorBuffer, color};
use layerpix_transform::{flip_horizontal, flip_vertical, resize, translate_truecolor};

fn stack() -> Vec<Layer> {
    let bottom = TruecolorBuffer::from_vec(
        3,
        2,
        vec![
            color::compose_rgb(10, 0, 0),
            color::compose_rgb(20, 0, 0),
            color::compose_rgb(30, 0, 0),
            color::compose_rgb(40, 0, 0),
            color::compose_rgb(50, 0, 0),
            color::compose_rgb(60, 0, 0),
        ],
    )
    .unwrap();

    let mut top = Layer::new(LayerId(2), TruecolorBuffer::new(3, 2).unwrap());
    top.visible = false;
    top.locked = true;

    vec![Layer::new(LayerId(1), bottom), top]
}

#[test]
fn flip_preserves_layer_metadata() {
    let layers = stack();
    let flipped = flip_horizontal(&layers).unwrap();

    assert_eq!(flipped.len(), 2);
    assert_eq!(flipped[0].id, LayerId(1));
    assert_eq!(flipped[1].id, LayerId(2));
    assert!(!flipped[1].visible);
    assert!(flipped[1].locked);
}

#[test]
fn flip_involution_over_stack() {
    let layers = stack();
    assert_eq!(flip_horizontal(&flip_horizontal(&layers).unwrap()).unwrap(), layers);
    assert_eq!(flip_vertical(&flip_vertical(&layers).unwrap()).unwrap(), layers);
}

#[test]
fn resize_up_then_down_preserves_content() {
    let layers = stack();
    let grown = resize(&layers, ColorMode::Truecolor, 5, 6).unwrap();
    let back = resize(&grown, ColorMode::Truecolor, 3, 2).unwrap();
    assert_eq!(back, layers);
}

#[test]
fn resize_keeps_every_layer_at_new_dimensions() {
    let layers = stack();
    let out = resize(&layers, ColorMode::Truecolor, 4, 5).unwrap();
    for layer in &out {
        assert_eq!(layer.data.width(), 4);
        assert_eq!(layer.data.height(), 5);
        assert_eq!(layer.data.len(), 20);
    }
}

#[test]
fn translate_round_trip_region() {
    let src = TruecolorBuffer::from_vec(
        4,
        4,
        (0..16).map(|i| color::compose_rgb(i as u8, 0, 0)).collect(),
    )
    .unwrap();

    let shifted = translate_truecolor(src.clone(), 2, 1);
    let back = translate_truecolor(shifted, -2, -1);

    for y in 0..3u32 {
        for x in 0..2u32 {
            assert_eq!(back.get_pixel(x, y), src.get_pixel(x, y));
        }
    }
    // The rest collapsed to transparent on the way back
    assert_eq!(back.get_pixel(3, 3), Some(color::TRANSPARENT));
}

#[test]
fn translate_full_exit_all_transparent() {
    let src = TruecolorBuffer::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    for (dx, dy) in [(2, 0), (-2, 0), (0, 2), (0, -2), (5, 5)] {
        let out = translate_truecolor(src.clone(), dx, dy);
        assert!(
            out.data().iter().all(|&p| p == color::TRANSPARENT),
            "({dx},{dy}) left content behind"
        );
    }
}

#[test]
fn indexed_stack_resize_grows_transparent() {
    let buf = IndexedBuffer::from_vec(2, 2, vec![5, 5, 5, 5]).unwrap();
    let layers = vec![Layer::new(LayerId(9), buf)];
    let out = resize(&layers, ColorMode::Indexed, 3, 3).unwrap();

    let got = out[0].data.as_indexed().unwrap();
    assert_eq!(got.data(), &[5, 5, 0, 5, 5, 0, 0, 0, 0]);
}
