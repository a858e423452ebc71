use cgmath::{Point2, Vector2};
use parking_lot::Mutex;
use perch::basic::{Panel, Spacer, Swatch};
use perch::canvas::{DisplayList, DrawCommand};
use perch::color::Color;
use perch::composite::VStack;
use perch::drag_and_drop::{DropBox, DropInserter};
use perch::scroll::ScrollPort;
use perch::tooltip::{tooltip, TipStatus, DEFAULT_TOOLTIP_DELAY};
use perch::{DropInfo, Element, Host, Rect};
use std::sync::Arc;
use std::time::Duration;

const ROW: &str = "application/x-perch-row";

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn tooltip_shows_after_default_delay() {
    init_logging();
    let subject = Spacer::new(Vector2::new(100., 20.));
    let tip = Panel::new(Vector2::new(40., 30.));
    let mut host = Host::new(tooltip(subject, tip), Rect::from_ltrb(10., 50., 110., 70.));
    let region = Rect::from_ltrb(10., 20., 110., 70.);

    host.cursor_moved(Point2::new(20., 60.));
    assert_eq!(host.root().status(), TipStatus::Delayed);
    assert_eq!(host.take_dirty(), None);

    host.cursor_moved(Point2::new(30., 60.));
    assert_eq!(host.advance(DEFAULT_TOOLTIP_DELAY), 1);
    assert_eq!(host.root().status(), TipStatus::Visible);
    assert_eq!(host.take_dirty(), Some(region));

    let mut list = DisplayList::new();
    host.draw(&mut list);
    let tip_bounds = Rect::from_ltrb(10., 20., 50., 50.);
    assert!(list
        .commands()
        .contains(&DrawCommand::RoundRect(tip_bounds, host.theme().panel_corner_radius)));

    host.cursor_moved(Point2::new(500., 500.));
    assert_eq!(host.root().status(), TipStatus::Hidden);
    assert_eq!(host.take_dirty(), Some(region));
    assert_eq!(host.view().pending_timers(), 0);
}

#[test]
fn tooltip_in_a_list_hides_when_pointer_moves_on() {
    init_logging();
    let shown = Arc::new(Mutex::new(Vec::new()));
    let shown2 = Arc::clone(&shown);
    let first = tooltip(
        Spacer::new(Vector2::new(50., 20.)),
        Panel::new(Vector2::new(20., 10.)),
    )
    .on_hover(move |visible| shown2.lock().push(visible));
    let second = Spacer::new(Vector2::new(50., 20.));
    let stack = VStack::new(vec![
        Box::new(first) as Box<dyn Element>,
        Box::new(second),
    ]);
    let mut host = Host::new(stack, Rect::from_ltrb(0., 0., 100., 100.));

    host.cursor_moved(Point2::new(5., 5.));
    host.advance(Duration::from_millis(200));
    host.cursor_moved(Point2::new(5., 25.));
    host.advance(Duration::from_secs(1));

    assert_eq!(*shown.lock(), vec![false], "left before the delay");
}

fn rows(count: u8) -> VStack {
    VStack::new(
        (0..count)
            .map(|i| Box::new(Swatch::new(Color::rgba8(i, 0, 0, 255), 30.)) as Box<dyn Element>)
            .collect(),
    )
}

fn row_ids(stack: &VStack) -> Vec<u8> {
    stack
        .children()
        .iter()
        .filter_map(|child| child.as_any().downcast_ref::<Swatch>())
        .map(|swatch| (swatch.color.r * 255.).round() as u8)
        .collect()
}

#[test]
fn reorder_rows_in_a_scrolled_list() {
    init_logging();
    let dropped = Arc::new(Mutex::new(None));
    let dropped2 = Arc::clone(&dropped);
    let inserter = DropInserter::new(rows(5), &[ROW], move |info, index| {
        let from = info.get(ROW).and_then(|data| data.first().copied());
        *dropped2.lock() = from.map(|from| (from as usize, index));
        from.is_some()
    })
    .unwrap();
    let mut host = Host::new(ScrollPort::new(inserter), Rect::from_ltrb(0., 0., 200., 100.));

    // drag row 0 near the bottom edge
    let info = DropInfo::new(Point2::new(50., 95.)).with_data(ROW, vec![0u8]);
    host.drag_over(&info);
    assert_eq!(host.root().state().offset(), 15., "scrolled towards the drag");
    assert!(host.root().subject_ref().base().is_tracking());
    // the inserter refreshes its whole content, the port its viewport
    assert_eq!(host.take_dirty(), Some(Rect::from_ltrb(0., 0., 200., 150.)));

    // rows now start at -15; the pointer is in the lower half of row 3 (75..105)
    let mut list = DisplayList::new();
    host.draw(&mut list);
    assert_eq!(host.root().subject_ref().insertion_pos(), Some(4));
    assert!(list
        .commands()
        .contains(&DrawCommand::MoveTo(Point2::new(0., 105.))));

    assert!(host.drop(&info));
    let (from, to) = dropped.lock().take().unwrap();
    let stack = host.root_mut().subject_mut().subject_mut();
    stack.move_to_insertion_point(from, to);
    assert_eq!(row_ids(stack), vec![1, 2, 3, 0, 4]);

    assert!(!host.drop(&info), "nothing left to consume");
}

#[test]
fn drag_moves_between_drop_boxes() {
    init_logging();
    let text = DropBox::new(Spacer::new(Vector2::new(10., 50.)), &["text/plain"], |_| true);
    let image = DropBox::new(Spacer::new(Vector2::new(10., 50.)), &["image/png"], |_| true);
    let stack = VStack::new(vec![
        Box::new(text.unwrap()) as Box<dyn Element>,
        Box::new(image.unwrap()),
    ]);
    let mut host = Host::new(stack, Rect::from_ltrb(0., 0., 100., 100.));

    let tracking = |host: &Host<VStack>| {
        host.root()
            .children()
            .iter()
            .map(|child| {
                child
                    .as_any()
                    .downcast_ref::<DropBox<Spacer>>()
                    .map_or(false, |b| b.base().is_tracking())
            })
            .collect::<Vec<_>>()
    };

    let info = DropInfo::new(Point2::new(5., 10.)).with_data("text/plain", "hello");
    host.drag_over(&info);
    assert_eq!(tracking(&host), vec![true, false]);
    assert_eq!(host.take_dirty(), Some(Rect::from_ltrb(0., 0., 100., 50.)));

    host.drag_over(&info.at(Point2::new(5., 60.)));
    assert_eq!(tracking(&host), vec![false, false]);
    assert_eq!(
        host.take_dirty(),
        Some(Rect::from_ltrb(0., 0., 100., 50.)),
        "only the box that stopped tracking is redrawn"
    );

    host.drag_leave(&info);
    assert_eq!(host.take_dirty(), None);
}
