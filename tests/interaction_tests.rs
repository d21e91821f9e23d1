use glam::Vec2;
use stamfluid::{PointerInput, StableFluid};

#[test]
fn test_pointer_maps_to_interior_cells() {
    let fluid = StableFluid::new(64).unwrap();
    let grid = fluid.grid();

    assert_eq!(grid.coords(grid.cell_at(Vec2::new(0.0, 0.0))), (1, 1));
    assert_eq!(grid.coords(grid.cell_at(Vec2::new(0.5, 0.25))), (33, 17));
    // The far edge would be cell n + 1; it is pulled back inside.
    assert_eq!(grid.coords(grid.cell_at(Vec2::new(1.0, 1.0))), (64, 64));
    assert_eq!(grid.coords(grid.cell_at(Vec2::new(-3.0, 7.0))), (1, 64));
}

#[test]
fn test_velocity_press_uses_previous_minus_current() {
    let mut fluid = StableFluid::new(16).unwrap();
    let mut pointer = PointerInput::new(5.0, 100.0);
    let viewport = Vec2::new(160.0, 160.0);

    // The first press measures from the origin.
    let first = pointer.press_velocity(&mut fluid, Vec2::new(40.0, 80.0), viewport).unwrap();
    assert_eq!(first, Vec2::new(-200.0, -400.0));
    assert_eq!(pointer.last_position(), Vec2::new(40.0, 80.0));

    let second = pointer.press_velocity(&mut fluid, Vec2::new(50.0, 70.0), viewport).unwrap();
    assert_eq!(second, Vec2::new(-50.0, 50.0));
}

#[test]
fn test_density_press_stages_source_and_moves_anchor() {
    let mut fluid = StableFluid::new(16).unwrap();
    let mut pointer = PointerInput::new(5.0, 100.0);
    let viewport = Vec2::new(160.0, 160.0);

    pointer.press_density(&mut fluid, Vec2::new(85.0, 85.0), viewport).unwrap();
    assert_eq!(pointer.last_position(), Vec2::new(85.0, 85.0));
    assert_eq!(pointer.impulse_for(Vec2::new(85.0, 85.0)), Vec2::ZERO);

    fluid.tick(0.1, 0.0).unwrap();
    let cell = fluid.grid().index(9, 9);
    assert!(
        (fluid.density()[cell] - 10.0).abs() < 1e-4,
        "source of 100 scaled by dt=0.1, got {}",
        fluid.density()[cell]
    );
}

#[test]
fn test_velocity_press_sets_fluid_in_motion() {
    let mut fluid = StableFluid::new(16).unwrap();
    let mut pointer = PointerInput::new(5.0, 100.0);
    let viewport = Vec2::new(160.0, 160.0);

    pointer.press_density(&mut fluid, Vec2::new(80.0, 80.0), viewport).unwrap();
    pointer.press_velocity(&mut fluid, Vec2::new(79.0, 80.0), viewport).unwrap();
    fluid.tick(0.1, 0.0).unwrap();

    let speed: f32 = fluid
        .velocity_x()
        .iter()
        .zip(fluid.velocity_y())
        .map(|(u, v)| (u * u + v * v).sqrt())
        .sum();
    assert!(speed > 0.0, "impulse should create velocity");
    assert!(speed.is_finite());
}
