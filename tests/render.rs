use nosync_frame::render::{frame_to_string, save_png};
use nosync_frame::{Frame, Rect};

#[test]
fn text_render_matches_the_two_draw_demo() {
    let mut frame = Frame::new(10, 15);
    frame.draw(Rect::new(1, 1, 3, 2), 1).unwrap();
    frame.draw(Rect::new(5, 1, 8, 13), 2).unwrap();

    let text = frame_to_string(&frame).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 1 + 15);
    assert_eq!(lines[0], "frame");
    assert_eq!(lines[1], "1111111111"); // column 0
    assert_eq!(lines[2], "1000100001"); // columns 1-2: both rects
    assert_eq!(lines[3], "1000100001");
    assert_eq!(lines[4], "1111100001"); // columns 3-13: second rect only
    assert_eq!(lines[14], "1111100001");
    assert_eq!(lines[15], "1111111111"); // column 14
}

#[test]
fn png_snapshot_round_trips_through_disk() {
    let mut frame = Frame::new(6, 4);
    frame.draw(Rect::new(1, 1, 4, 2), 2).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    save_png(&frame, &path).unwrap();

    let img = image::open(&path).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (6, 4));
    let bright = img.pixels().filter(|p| p.0[0] == 255).count();
    assert_eq!(bright, 8);
    assert_eq!(img.get_pixel(1, 1).0[0], 255);
    assert_eq!(img.get_pixel(0, 0).0[0], 0);
}
