use std::rc::Rc;

use quilt_common::types::{Direction, LayoutDirection, Rectangle, WindowId, WindowState};

use crate::commands::TilingCommand;
use crate::interface::{HeadlessInterface, TilingInterface};
use crate::node::NodeKey;

use super::*;

fn output_area() -> Rectangle {
    Rectangle::new(0, 0, 1920, 1080)
}

fn setup_with(options: TilingOptions) -> (TilingWindowTree, Rc<HeadlessInterface>) {
    let host = Rc::new(HeadlessInterface::new(output_area()));
    let tree = TilingWindowTree::new(output_area(), host.clone(), options);
    (tree, host)
}

fn setup() -> (TilingWindowTree, Rc<HeadlessInterface>) {
    setup_with(TilingOptions::default())
}

fn open(tree: &mut TilingWindowTree, host: &HeadlessInterface) -> WindowId {
    let window = host.open_window();
    tree.allocate_position(WindowSpecification::default());
    tree.advise_new_window(window);
    window
}

fn leaf(tree: &TilingWindowTree, window: WindowId) -> NodeKey {
    tree.graph().leaf_for_window(window).unwrap()
}

fn logical(tree: &TilingWindowTree, window: WindowId) -> Rectangle {
    tree.graph().get_logical_area(leaf(tree, window))
}

fn placed(host: &HeadlessInterface, window: WindowId) -> Rectangle {
    host.window(window).unwrap().rectangle
}

/// Root horizontal with `a` on the left and a vertical lane of `b` over `c`.
fn side_by_stack() -> (TilingWindowTree, Rc<HeadlessInterface>, [WindowId; 3]) {
    let (mut tree, host) = setup_with(TilingOptions {
        default_direction: LayoutDirection::Vertical,
        ..TilingOptions::default()
    });
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    assert!(tree.request_horizontal());
    let c = open(&mut tree, &host);
    (tree, host, [a, b, c])
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn two_windows_share_output_with_gap() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    assert_eq!(logical(&tree, a), Rectangle::new(0, 0, 960, 1080));
    assert_eq!(logical(&tree, b), Rectangle::new(960, 0, 960, 1080));
    assert_eq!(placed(&host, a), Rectangle::new(0, 0, 955, 1080));
    assert_eq!(placed(&host, b), Rectangle::new(965, 0, 955, 1080));
    assert_eq!(host.window(b).unwrap().clip, Some(placed(&host, b)));
    assert_eq!(tree.active_window(), Some(b));
    assert_eq!(host.active_window(), Some(b));
}

#[test]
fn allocate_position_is_stable_until_window_arrives() {
    let (mut tree, host) = setup();
    open(&mut tree, &host);
    let first = tree.allocate_position(WindowSpecification::default());
    let nodes = tree.graph().len();
    let second = tree.allocate_position(WindowSpecification::default());

    assert_eq!(first, second);
    assert_eq!(first.area, Some(Rectangle::new(965, 0, 955, 1080)));
    assert_eq!(first.state, Some(WindowState::Restored));
    assert_eq!(tree.graph().len(), nodes);

    let window = host.open_window();
    let key = tree.advise_new_window(window);
    assert_eq!(tree.graph().window(key), Some(window));
    assert_eq!(placed(&host, window), first.area.unwrap());
}

#[test]
fn new_window_wraps_selection_across_default_axis() {
    let (tree, _host, [a, b, c]) = side_by_stack();
    let root = tree.root();
    assert_eq!(tree.graph().axis(root), Some(LayoutDirection::Horizontal));

    let lane = tree.graph().parent(leaf(&tree, b)).unwrap();
    assert_ne!(lane, root);
    assert_eq!(tree.graph().axis(lane), Some(LayoutDirection::Vertical));
    assert_eq!(tree.graph().children(root), &[leaf(&tree, a), lane]);
    assert_eq!(logical(&tree, b), Rectangle::new(960, 0, 960, 540));
    assert_eq!(logical(&tree, c), Rectangle::new(960, 540, 960, 540));
}

#[test]
fn removing_middle_window_splits_equally() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    let c = open(&mut tree, &host);
    assert_eq!(logical(&tree, b).size.width, 640);

    assert!(tree.advise_delete_window(b));
    host.close_window(b);

    assert_eq!(logical(&tree, a), Rectangle::new(0, 0, 960, 1080));
    assert_eq!(logical(&tree, c), Rectangle::new(960, 0, 960, 1080));
    assert_eq!(placed(&host, c), Rectangle::new(965, 0, 955, 1080));
}

#[test]
fn deleting_active_selects_previous_sibling() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    let c = open(&mut tree, &host);

    tree.advise_delete_window(c);
    assert_eq!(tree.active_window(), Some(b));
    assert_eq!(host.active_window(), Some(b));

    tree.advise_focus_gained(a);
    tree.advise_delete_window(a);
    assert_eq!(tree.active_window(), Some(b));
}

#[test]
fn cancelled_allocation_gives_space_back() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    tree.allocate_position(WindowSpecification::default());
    tree.allocate_position(WindowSpecification::default());
    assert_eq!(tree.leaves().len(), 2);
    assert!(!tree.try_select_next(Direction::Right));
    assert_eq!(tree.active_window(), Some(a));

    assert!(tree.cancel_allocation());
    assert!(!tree.cancel_allocation());
    assert_eq!(tree.leaves().len(), 1);
    assert_eq!(logical(&tree, a), output_area());
    assert_eq!(placed(&host, a), output_area());

    let b = open(&mut tree, &host);
    assert_eq!(placed(&host, b), Rectangle::new(965, 0, 955, 1080));
}

#[test]
fn reserved_slot_is_not_a_window() {
    let (mut tree, _host) = setup();
    tree.allocate_position(WindowSpecification::default());
    assert!(tree.is_empty());
    assert!(tree.cancel_allocation());
    assert!(tree.graph().children(tree.root()).is_empty());
}

#[test]
fn deleting_last_window_empties_tree() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    assert!(!tree.is_empty());
    assert!(tree.advise_delete_window(a));
    assert!(tree.is_empty());
    assert_eq!(tree.active(), None);
    assert!(!tree.advise_delete_window(a));
}

#[test]
fn deleting_collapses_lane() {
    let (mut tree, host, [a, b, c]) = side_by_stack();
    let lane = tree.graph().parent(leaf(&tree, b)).unwrap();
    tree.advise_delete_window(c);

    assert!(!tree.graph().contains(lane));
    assert_eq!(tree.graph().parent(leaf(&tree, b)), Some(tree.root()));
    assert_eq!(logical(&tree, b), Rectangle::new(960, 0, 960, 1080));
    assert_eq!(placed(&host, b), Rectangle::new(965, 0, 955, 1080));
    assert_eq!(logical(&tree, a), Rectangle::new(0, 0, 960, 1080));
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn select_moves_between_siblings() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    assert!(tree.try_select_next(Direction::Left));
    assert_eq!(tree.active_window(), Some(a));
    assert_eq!(host.active_window(), Some(a));
    assert!(tree.try_select_next(Direction::Right));
    assert_eq!(tree.active_window(), Some(b));
}

#[test]
fn select_enters_lane_facing_the_source() {
    let (mut tree, _host, [a, b, c]) = side_by_stack();
    assert_eq!(tree.active_window(), Some(c));

    assert!(tree.try_select_next(Direction::Left));
    assert_eq!(tree.active_window(), Some(a));
    assert!(tree.try_select_next(Direction::Right));
    assert_eq!(tree.active_window(), Some(c));
    assert!(tree.try_select_next(Direction::Up));
    assert_eq!(tree.active_window(), Some(b));
    assert!(!tree.try_select_next(Direction::Up));
}

#[test]
fn boundary_commands_change_nothing() {
    let (mut tree, host) = setup();
    open(&mut tree, &host);
    let before = tree.layout_snapshot();
    host.clear_calls();

    for direction in Direction::ALL {
        assert!(!tree.try_select_next(direction));
        assert!(!tree.try_move_active_window(direction));
        assert!(!tree.try_resize_active_window(direction));
    }
    assert!(tree.toggle_resize_mode());
    for direction in Direction::ALL {
        assert!(!tree.try_resize_active_window(direction));
    }

    assert!(host.calls().is_empty());
    assert_eq!(tree.layout_snapshot(), before);
}

#[test]
fn select_window_from_point_skips_gaps() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    assert_eq!(tree.select_window_from_point(100, 100), Some(leaf(&tree, a)));
    assert_eq!(tree.select_window_from_point(960, 10), None);
    assert_eq!(tree.select_window_from_point(1000, 10), Some(leaf(&tree, b)));
    assert_eq!(tree.select_window_from_point(5000, 10), None);
}

// =============================================================================
// Movement
// =============================================================================

#[test]
fn point_lookup_is_refused_while_fullscreen() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    open(&mut tree, &host);
    assert_eq!(tree.select_window_from_point(100, 100), Some(leaf(&tree, a)));

    assert!(tree.try_toggle_active_fullscreen());
    assert_eq!(tree.select_window_from_point(100, 100), None);

    assert!(tree.try_toggle_active_fullscreen());
    assert_eq!(tree.select_window_from_point(100, 100), Some(leaf(&tree, a)));
}

#[test]
fn move_swaps_with_sibling() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    tree.try_select_next(Direction::Left);

    assert!(tree.try_move_active_window(Direction::Right));
    assert_eq!(tree.windows(), vec![b, a]);
    assert_eq!(placed(&host, a), Rectangle::new(965, 0, 955, 1080));
    assert_eq!(placed(&host, b), Rectangle::new(0, 0, 955, 1080));
    assert_eq!(tree.active_window(), Some(a));

    host.clear_calls();
    assert!(!tree.try_move_active_window(Direction::Right));
    assert!(host.calls().is_empty());
}

#[test]
fn move_into_neighbouring_lane_enters_at_near_edge() {
    let (mut tree, host) = setup_with(TilingOptions {
        default_direction: LayoutDirection::Vertical,
        ..TilingOptions::default()
    });
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    tree.request_horizontal();
    tree.try_select_next(Direction::Left);
    let d = open(&mut tree, &host);
    tree.try_select_next(Direction::Right);
    let c = open(&mut tree, &host);
    tree.try_select_next(Direction::Left);
    tree.try_select_next(Direction::Up);
    assert_eq!(tree.active_window(), Some(a));

    let source_lane = tree.graph().parent(leaf(&tree, a)).unwrap();
    let target_lane = tree.graph().parent(leaf(&tree, b)).unwrap();
    assert!(tree.try_move_active_window(Direction::Right));

    let root = tree.root();
    assert!(!tree.graph().contains(source_lane));
    assert_eq!(tree.graph().children(root), &[leaf(&tree, d), target_lane]);
    assert_eq!(logical(&tree, d), Rectangle::new(0, 0, 960, 1080));

    assert_eq!(tree.graph().parent(leaf(&tree, a)), Some(target_lane));
    assert_eq!(
        tree.graph().children(target_lane),
        &[leaf(&tree, b), leaf(&tree, a), leaf(&tree, c)]
    );
    assert_eq!(logical(&tree, b), Rectangle::new(960, 0, 960, 360));
    assert_eq!(logical(&tree, a), Rectangle::new(960, 360, 960, 360));
    assert_eq!(logical(&tree, c), Rectangle::new(960, 720, 960, 360));
    assert_eq!(placed(&host, a), Rectangle::new(965, 365, 955, 350));
    assert_eq!(tree.active_window(), Some(a));
}

#[test]
fn move_across_lanes_never_nests_a_new_lane() {
    let (mut tree, host, [a, b, c]) = side_by_stack();
    let d = open(&mut tree, &host);
    tree.advise_focus_gained(a);
    let lanes_before = tree.graph().len() - tree.leaves().len();

    assert!(tree.try_move_active_window(Direction::Right));
    let target = tree.graph().parent(leaf(&tree, b)).unwrap();
    assert_eq!(tree.graph().parent(leaf(&tree, a)), Some(target));
    assert_eq!(tree.graph().parent(leaf(&tree, c)), Some(target));
    assert_eq!(tree.graph().parent(leaf(&tree, d)), Some(target));
    assert!(tree.graph().len() - tree.leaves().len() <= lanes_before);
}

#[test]
fn move_out_of_root_lets_root_absorb_lane() {
    let (mut tree, host, [a, b, c]) = side_by_stack();
    tree.advise_focus_gained(a);

    assert!(tree.try_move_active_window(Direction::Right));

    let root = tree.root();
    assert_eq!(tree.graph().axis(root), Some(LayoutDirection::Vertical));
    assert_eq!(
        tree.graph().children(root),
        &[leaf(&tree, b), leaf(&tree, c), leaf(&tree, a)]
    );
    assert_eq!(logical(&tree, b), Rectangle::new(0, 0, 1920, 360));
    assert_eq!(logical(&tree, c), Rectangle::new(0, 360, 1920, 360));
    assert_eq!(logical(&tree, a), Rectangle::new(0, 720, 1920, 360));
    assert_eq!(placed(&host, b), Rectangle::new(0, 0, 1920, 355));
}

#[test]
fn no_lane_ever_holds_one_child() {
    let (mut tree, host, [a, _, _]) = side_by_stack();
    tree.advise_focus_gained(a);
    for direction in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
        tree.try_move_active_window(direction);
        tree.foreach_node(|key, node| {
            if node.is_lane() && key != tree.root() {
                assert!(tree.graph().children(key).len() >= 2);
            }
        });
    }
    assert_eq!(tree.windows().len(), 3);
    assert_eq!(host.windows().len(), 3);
}

// =============================================================================
// Resize and direction
// =============================================================================

#[test]
fn resize_requires_resize_mode() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    tree.try_select_next(Direction::Left);

    assert!(!tree.try_resize_active_window(Direction::Right));
    assert!(tree.toggle_resize_mode());
    assert!(tree.is_resizing());
    assert!(!tree.try_select_next(Direction::Right));

    assert!(tree.try_resize_active_window(Direction::Right));
    assert_eq!(logical(&tree, a).size.width, 1010);
    assert_eq!(logical(&tree, b), Rectangle::new(1010, 0, 910, 1080));
    assert_eq!(placed(&host, b), Rectangle::new(1015, 0, 905, 1080));

    assert!(tree.try_resize_active_window(Direction::Left));
    assert_eq!(logical(&tree, a).size.width, 960);
    assert!(!tree.try_resize_active_window(Direction::Up));

    assert!(tree.toggle_resize_mode());
    assert!(!tree.is_resizing());
}

#[test]
fn resize_stops_at_minimum_size() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    tree.try_select_next(Direction::Left);
    tree.toggle_resize_mode();

    while tree.try_resize_active_window(Direction::Left) {}
    assert_eq!(logical(&tree, a).size.width, 50);
    assert_eq!(logical(&tree, b).size.width, 1870);
}

#[test]
fn resize_mode_needs_a_selection() {
    let (mut tree, _host) = setup();
    assert!(!tree.toggle_resize_mode());
    assert_eq!(tree.mode(), TilingMode::Normal);
}

#[test]
fn request_vertical_restacks_lane() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    assert!(tree.request_vertical());
    assert_eq!(logical(&tree, a), Rectangle::new(0, 0, 1920, 540));
    assert_eq!(logical(&tree, b), Rectangle::new(0, 540, 1920, 540));
    assert_eq!(placed(&host, b), Rectangle::new(0, 545, 1920, 535));
    assert!(!tree.request_vertical());
}

// =============================================================================
// Fullscreen
// =============================================================================

#[test]
fn fullscreen_toggle_twice_restores_tile() {
    let (mut tree, host) = setup();
    open(&mut tree, &host);
    let b = open(&mut tree, &host);
    let before = host.window(b).unwrap();
    tree.toggle_resize_mode();

    assert!(tree.try_toggle_active_fullscreen());
    assert!(tree.has_fullscreen_window());
    assert!(!tree.is_resizing());
    let full = host.window(b).unwrap();
    assert_eq!(full.state, WindowState::Maximized);
    assert_eq!(full.clip, None);
    assert_eq!(full.rectangle, output_area());
    assert!(!tree.try_select_next(Direction::Left));

    assert!(tree.try_toggle_active_fullscreen());
    assert!(!tree.has_fullscreen_window());
    let after = host.window(b).unwrap();
    assert_eq!(after.state, WindowState::Restored);
    assert_eq!(after.rectangle, before.rectangle);
    assert_eq!(after.clip, before.clip);
}

#[test]
fn only_one_window_is_fullscreen() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);
    tree.try_toggle_active_fullscreen();

    tree.advise_focus_gained(a);
    assert!(tree.try_toggle_active_fullscreen());
    assert_eq!(host.get_state(a), WindowState::Maximized);
    assert_eq!(host.get_state(b), WindowState::Restored);
    assert_eq!(placed(&host, b), Rectangle::new(965, 0, 955, 1080));

    let fullscreen: Vec<_> = tree
        .layout_snapshot()
        .into_iter()
        .filter(|leaf| leaf.fullscreen)
        .collect();
    assert_eq!(fullscreen.len(), 1);
    assert_eq!(fullscreen[0].window, Some(a));
}

#[test]
fn host_driven_fullscreen_and_restore() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    open(&mut tree, &host);

    host.change_state(a, WindowState::Fullscreen).unwrap();
    assert!(tree.advise_fullscreen_window(a));
    assert!(tree.has_fullscreen_window());
    assert_eq!(tree.active_window(), Some(a));
    assert_eq!(host.window(a).unwrap().clip, None);

    host.change_state(a, WindowState::Restored).unwrap();
    assert!(tree.advise_restored_window(a));
    assert!(!tree.has_fullscreen_window());
    assert_eq!(placed(&host, a), Rectangle::new(0, 0, 955, 1080));
    assert!(!tree.advise_fullscreen_window(WindowId(404)));
}

#[test]
fn confirm_placement_holds_restored_windows_to_tile() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let proposed = Rectangle::new(10, 10, 300, 200);

    assert_eq!(
        tree.confirm_placement_on_display(a, WindowState::Restored, proposed),
        output_area()
    );
    assert_eq!(
        tree.confirm_placement_on_display(a, WindowState::Maximized, proposed),
        proposed
    );
    assert_eq!(
        tree.confirm_placement_on_display(WindowId(404), WindowState::Restored, proposed),
        proposed
    );
}

// =============================================================================
// Visibility and output geometry
// =============================================================================

#[test]
fn hide_and_show_whole_tree() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    tree.hide();
    assert!(tree.is_hidden());
    assert_eq!(host.get_state(a), WindowState::Hidden);
    assert_eq!(host.get_state(b), WindowState::Hidden);

    tree.show();
    assert!(!tree.is_hidden());
    assert_eq!(host.get_state(a), WindowState::Restored);
    assert_eq!(host.get_state(b), WindowState::Restored);
}

#[test]
fn output_resize_scales_layout() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    tree.set_output_area(Rectangle::new(0, 0, 3840, 2160));
    assert_eq!(logical(&tree, a), Rectangle::new(0, 0, 1920, 2160));
    assert_eq!(logical(&tree, b), Rectangle::new(1920, 0, 1920, 2160));
    assert_eq!(placed(&host, b), Rectangle::new(1925, 0, 1915, 2160));
}

#[test]
fn scale_round_trip_is_within_rounding() {
    let (mut tree, host) = setup();
    let windows: Vec<_> = (0..3).map(|_| open(&mut tree, &host)).collect();
    let before: Vec<_> = windows.iter().map(|w| logical(&tree, *w)).collect();

    tree.scale_area(1.37, 1.0);
    tree.scale_area(1.0 / 1.37, 1.0);

    for (window, original) in windows.iter().zip(before) {
        let area = logical(&tree, *window);
        assert!((area.left() - original.left()).abs() <= 1);
        assert!((area.size.width - original.size.width).abs() <= 1);
        assert_eq!(area.size.height, original.size.height);
    }
}

#[test]
fn translate_moves_every_window() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    tree.translate_by(100, 50);
    assert_eq!(placed(&host, a), Rectangle::new(100, 50, 1920, 1080));
}

#[test]
fn application_zone_limits_root() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    tree.set_application_zones(vec![Rectangle::new(0, 30, 1920, 1050)]);
    tree.recalculate_root_node_area();
    assert_eq!(placed(&host, a), Rectangle::new(0, 30, 1920, 1050));

    tree.set_application_zones(vec![Rectangle::new(5000, 0, 10, 10)]);
    tree.recalculate_root_node_area();
    assert_eq!(placed(&host, a), output_area());
}

#[test]
fn visible_area_loses_half_gap_per_neighbour() {
    let (tree, _host, _) = side_by_stack();
    let graph = tree.graph();
    for leaf in tree.leaves() {
        let logical = graph.get_logical_area(leaf);
        let visible = graph.get_visible_area(leaf);
        let neighbors = graph.neighbors(leaf);
        assert!(logical.contains_rect(&visible));
        let expected = neighbors.count() as i32 * 5;
        let shrink = (logical.size.width - visible.size.width)
            + (logical.size.height - visible.size.height);
        assert_eq!(shrink, expected);
    }
}

// =============================================================================
// Queries and commands
// =============================================================================

#[test]
fn foreach_and_find_node() {
    let (mut tree, host) = setup();
    open(&mut tree, &host);
    let b = open(&mut tree, &host);

    let mut count = 0;
    tree.foreach_node(|_, _| count += 1);
    assert_eq!(count, 3);

    let found = tree.find_node(|_, node| node.window() == Some(b));
    assert_eq!(found, Some(leaf(&tree, b)));
    assert_eq!(tree.find_node(|_, node| node.window() == Some(WindowId(404))), None);
}

#[test]
fn focus_advice_tracks_selection() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    tree.advise_focus_gained(a);
    assert_eq!(tree.active_window(), Some(a));
    tree.advise_focus_lost(b);
    assert_eq!(tree.active_window(), Some(a));
    tree.advise_focus_lost(a);
    assert_eq!(tree.active(), None);
    assert!(!tree.try_select_next(Direction::Right));
}

#[test]
fn constrain_reclips_tiled_window() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    host.noclip(a).unwrap();
    assert!(tree.constrain(a));
    assert_eq!(host.window(a).unwrap().clip, Some(output_area()));
    assert!(!tree.constrain(WindowId(404)));
}

#[test]
fn execute_dispatches_parsed_commands() {
    let (mut tree, host) = setup();
    let a = open(&mut tree, &host);
    let b = open(&mut tree, &host);

    let command: TilingCommand = "move:left".parse().unwrap();
    assert!(tree.execute(command));
    assert_eq!(tree.windows(), vec![b, a]);
    assert!(tree.execute(TilingCommand::ToggleFullscreen));
    assert!(tree.has_fullscreen_window());
    assert!(!tree.execute(TilingCommand::Select(Direction::Right)));
}

#[test]
fn layout_snapshot_serializes() {
    let (mut tree, host) = setup();
    open(&mut tree, &host);
    let json = serde_json::to_string(&tree.layout_snapshot()).unwrap();
    assert!(json.contains("\"visible\""));
    assert!(json.contains("\"active\":true"));
}
