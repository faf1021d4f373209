use widgetgrid_core::{CellPosition, GridBounds, GridSpec, Point, Size, Span};
use widgetgrid_designer::occupancy::{can_place, occupied};
use widgetgrid_designer::PlacementStore;

fn store() -> PlacementStore {
    PlacementStore::new(
        GridSpec::new(2, 4).unwrap(),
        GridBounds::new(Point::zero(), Size::new(400.0, 200.0)),
    )
}

#[test]
fn test_occupied_unions_placed_widgets() {
    let mut store = store();
    store.add(Span::new(2, 1).unwrap(), CellPosition::new(0, 0)).unwrap();
    store.add(Span::unit(), CellPosition::new(1, 3)).unwrap();

    let occ = occupied(store.widgets(), None);
    assert_eq!(occ.iter().collect::<Vec<_>>(), vec![0, 1, 7]);
    assert!(can_place(&[2, 3], &occ));
    assert!(!can_place(&[1], &occ));
}

#[test]
fn test_occupied_excluding_moving_widget() {
    let mut store = store();
    let big = store
        .add(Span::new(2, 2).unwrap(), CellPosition::new(0, 0))
        .unwrap()
        .id;
    store.add(Span::unit(), CellPosition::new(0, 3)).unwrap();

    let occ = store.occupied(Some(big));
    assert_eq!(occ.iter().collect::<Vec<_>>(), vec![3]);
    // Overlaps the moving widget's own old footprint: allowed.
    assert!(occ.can_place(&[1, 2, 5, 6]));
    // Touches the other widget: blocked.
    assert!(!occ.can_place(&[2, 3, 6, 7]));
}
