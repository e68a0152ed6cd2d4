use scrabble_board::render::{BoardView, PixelCanvas};
use scrabble_board::snapshot::{render_snapshot, write_snapshot};
use scrabble_board::types::PointerPosition;

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn canvas_hash(c: &PixelCanvas) -> u64 {
    fnv1a64_bytes(c.pixels().iter().flat_map(|p| p.iter().copied()))
}

#[test]
fn identical_inputs_give_identical_pixels() {
    let p = Some(PointerPosition::new(300, 300));
    let a = render_snapshot(p);
    let b = render_snapshot(p);
    assert_eq!(canvas_hash(&a), canvas_hash(&b));
    assert_eq!(a, b);
}

#[test]
fn repainting_same_canvas_twice_is_stable() {
    let view = BoardView::default();
    let mut canvas = PixelCanvas::board_sized();
    view.render_into(None, &mut canvas);
    let first = canvas_hash(&canvas);
    view.render_into(None, &mut canvas);
    assert_eq!(canvas_hash(&canvas), first);
}

#[test]
fn hover_changes_the_image() {
    let idle = render_snapshot(None);
    let hover = render_snapshot(Some(PointerPosition::new(1, 1)));
    assert_ne!(canvas_hash(&idle), canvas_hash(&hover));
}

#[test]
fn snapshot_file_is_a_ppm_of_the_surface() {
    let path = std::env::temp_dir().join(format!("scrabble-board-{}.ppm", std::process::id()));
    write_snapshot(&path, None).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let header = b"P6\n898 898\n255\n";
    assert!(bytes.starts_with(header));
    assert_eq!(bytes.len(), header.len() + 898 * 898 * 3);
}

#[test]
fn snapshot_to_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("scrabble-board-no-such-dir")
        .join("board.ppm");
    assert!(write_snapshot(&path, None).is_err());
}
