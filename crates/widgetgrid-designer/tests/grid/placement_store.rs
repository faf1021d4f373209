use widgetgrid_core::{
    CellPosition, GridBounds, GridSpec, PlacedWidget, PlacementError, Point, Size, Span, WidgetId,
};
use widgetgrid_designer::{PixelMetrics, PlacementStore};

fn bounds() -> GridBounds {
    GridBounds::new(Point::zero(), Size::new(400.0, 200.0))
}

fn store() -> PlacementStore {
    PlacementStore::new(GridSpec::new(2, 4).unwrap(), bounds())
}

#[test]
fn test_add_computes_indices_and_offset() {
    let mut store = store();
    let widget = store
        .add(Span::new(2, 1).unwrap(), CellPosition::new(1, 1))
        .unwrap()
        .clone();

    assert_eq!(widget.cell_indices, vec![5, 6]);
    assert_eq!(widget.pixel_offset, Point::new(100.0, 100.0));
    assert!(!widget.offset_stale);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(widget.id), Some(&widget));
}

#[test]
fn test_add_rejects_overlap() {
    let mut store = store();
    store.add(Span::new(2, 1).unwrap(), CellPosition::new(0, 1)).unwrap();

    let err = store
        .add(Span::new(2, 2).unwrap(), CellPosition::new(0, 2))
        .unwrap_err();
    assert_eq!(err, PlacementError::Occupied { conflicts: vec![2] });
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_rejects_out_of_bounds() {
    let mut store = store();
    let err = store
        .add(Span::new(2, 1).unwrap(), CellPosition::new(0, 3))
        .unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { rows: 2, columns: 4, .. }));

    let err = store.add(Span::unit(), CellPosition::new(2, 0)).unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));
    assert!(store.is_empty());
}

#[test]
fn test_move_preserves_id_and_updates_offset() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;

    store.move_to(id, CellPosition::new(1, 3)).unwrap();
    let widget = store.get(id).unwrap();
    assert_eq!(widget.cell_indices, vec![7]);
    assert_eq!(widget.pixel_offset, Point::new(300.0, 100.0));
}

#[test]
fn test_move_overlapping_own_footprint() {
    let mut store = store();
    let id = store
        .add(Span::new(2, 2).unwrap(), CellPosition::new(0, 0))
        .unwrap()
        .id;

    store.move_to(id, CellPosition::new(0, 1)).unwrap();
    assert_eq!(store.get(id).unwrap().cell_indices, vec![1, 2, 5, 6]);
}

#[test]
fn test_move_blocked_by_other_widget() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;
    store.add(Span::unit(), CellPosition::new(0, 1)).unwrap();

    let err = store.move_to(id, CellPosition::new(0, 1)).unwrap_err();
    assert_eq!(err, PlacementError::Occupied { conflicts: vec![1] });
    assert_eq!(store.get(id).unwrap().cell_indices, vec![0]);
}

#[test]
fn test_move_unknown_widget() {
    let mut store = store();
    let id = WidgetId::new();
    assert_eq!(
        store.move_to(id, CellPosition::new(0, 0)),
        Err(PlacementError::UnknownWidget(id))
    );
}

#[test]
fn test_remove() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;

    let removed = store.remove(id).unwrap();
    assert_eq!(removed.id, id);
    assert!(store.remove(id).is_none());
    assert!(store.occupied(None).is_empty());
}

#[test]
fn test_migrate_all_keeps_fitting_widgets() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(0, 1)).unwrap().id;

    let dropped = store.migrate_all(GridSpec::new(4, 4).unwrap());
    assert!(dropped.is_empty());

    let widget = store.get(id).unwrap();
    assert_eq!(widget.cell_indices, vec![1]);
    assert!(widget.offset_stale);
    assert_eq!(store.spec(), &GridSpec::new(4, 4).unwrap());
}

#[test]
fn test_migrate_all_drops_unfittable_widgets() {
    let mut store = PlacementStore::new(GridSpec::new(4, 8).unwrap(), bounds());
    let keep = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;
    let wide = store
        .add(Span::new(4, 1).unwrap(), CellPosition::new(0, 4))
        .unwrap()
        .id;

    let dropped = store.migrate_all(GridSpec::new(2, 4).unwrap());
    assert_eq!(dropped, vec![wide]);
    assert!(store.contains(keep));
    assert!(!store.contains(wide));
}

#[test]
fn test_migrate_all_drops_colliding_widgets() {
    let mut store = store();
    let first = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;
    let second = store.add(Span::unit(), CellPosition::new(0, 1)).unwrap().id;

    // Both columns 0 and 1 collapse onto column 0 of a 2-column grid.
    let dropped = store.migrate_all(GridSpec::new(2, 2).unwrap());
    assert_eq!(dropped, vec![second]);
    assert_eq!(store.get(first).unwrap().cell_indices, vec![0]);
}

#[test]
fn test_set_grid_migrates_and_refreshes_offsets() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(1, 3)).unwrap().id;

    let new_bounds = GridBounds::new(Point::zero(), Size::new(400.0, 400.0));
    let dropped = store.set_grid(GridSpec::new(4, 4).unwrap(), new_bounds);
    assert!(dropped.is_empty());

    let widget = store.get(id).unwrap();
    // (1,3) -> (2,3) in a 4x4 grid of 100px cells.
    assert_eq!(widget.cell_indices, vec![11]);
    assert_eq!(widget.pixel_offset, Point::new(300.0, 200.0));
    assert!(!widget.offset_stale);
}

#[test]
fn test_set_bounds_recomputes_offsets() {
    let mut store = store();
    let id = store.add(Span::unit(), CellPosition::new(1, 1)).unwrap().id;

    store.set_bounds(GridBounds::new(Point::new(50.0, 50.0), Size::new(800.0, 400.0)));
    assert_eq!(store.get(id).unwrap().pixel_offset, Point::new(250.0, 250.0));
}

#[test]
fn test_origin_correction_and_padding() {
    let mut store = store().with_metrics(PixelMetrics {
        origin_correction: Point::new(20.0, 10.0),
        cell_padding: 5.0,
    });
    let widget = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap();
    assert_eq!(widget.pixel_offset, Point::new(-15.0, -5.0));
}

#[test]
fn test_find_first_available_scans_row_major() {
    let mut store = store();
    store.add(Span::new(2, 1).unwrap(), CellPosition::new(0, 0)).unwrap();
    store.add(Span::unit(), CellPosition::new(0, 3)).unwrap();

    assert_eq!(
        store.find_first_available(Span::unit()),
        Some(CellPosition::new(0, 2))
    );
    assert_eq!(
        store.find_first_available(Span::new(2, 1).unwrap()),
        Some(CellPosition::new(1, 0))
    );
    assert_eq!(store.find_first_available(Span::new(2, 2).unwrap()), None);
}

#[test]
fn test_add_at_first_available_reports_no_space() {
    let mut store = store();
    store.add(Span::new(4, 2).unwrap(), CellPosition::new(0, 0)).unwrap();

    let err = store
        .add_at_first_available(Some("clock".to_string()), Span::unit())
        .unwrap_err();
    assert_eq!(err, PlacementError::NoSpace { span: Span::unit() });
}

fn record(span: Span, cells: Vec<usize>) -> PlacedWidget {
    PlacedWidget {
        id: WidgetId::new(),
        kind: None,
        span,
        cell_indices: cells,
        pixel_offset: Point::zero(),
        offset_stale: true,
    }
}

#[test]
fn test_restore_normalizes_order() {
    let mut store = store();
    let widget = store
        .restore(record(Span::new(2, 2).unwrap(), vec![6, 2, 5, 1]))
        .unwrap();

    assert_eq!(widget.cell_indices, vec![1, 2, 5, 6]);
    assert_eq!(widget.pixel_offset, Point::new(100.0, 0.0));
    assert!(!widget.offset_stale);
}

#[test]
fn test_restore_rejects_bad_records() {
    let mut store = store();

    let err = store
        .restore(record(Span::new(2, 1).unwrap(), vec![1, 5]))
        .unwrap_err();
    assert!(matches!(err, PlacementError::MalformedRecord { .. }));

    let err = store.restore(record(Span::unit(), vec![])).unwrap_err();
    assert!(matches!(err, PlacementError::MalformedRecord { .. }));

    let err = store
        .restore(record(Span::new(2, 1).unwrap(), vec![3, 4]))
        .unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));

    let kept = store.restore(record(Span::unit(), vec![0])).unwrap().clone();
    let err = store.restore(kept.clone()).unwrap_err();
    assert_eq!(err, PlacementError::DuplicateWidget(kept.id));

    let err = store.restore(record(Span::unit(), vec![0])).unwrap_err();
    assert_eq!(err, PlacementError::Occupied { conflicts: vec![0] });
}

#[test]
fn test_far_off_start_is_out_of_bounds() {
    let mut store = store();

    let err = store
        .add(Span::unit(), CellPosition::new(usize::MAX, 0))
        .unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));

    let id = store.add(Span::unit(), CellPosition::new(0, 0)).unwrap().id;
    let err = store
        .move_to(id, CellPosition::new(0, usize::MAX))
        .unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));
    assert_eq!(store.get(id).unwrap().cell_indices, vec![0]);
}

#[test]
fn test_huge_span_is_out_of_bounds() {
    let mut store = store();
    let tall = Span::new(1, usize::MAX).unwrap();

    let err = store.restore(record(tall, vec![4])).unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));

    let err = store.restore(record(tall, vec![usize::MAX])).unwrap_err();
    assert!(matches!(err, PlacementError::OutOfBounds { .. }));

    assert_eq!(store.find_first_available(tall), None);
    assert!(store.is_empty());
}
