/// Merge staged forcing into a field: `current += dt * previous`, ghost cells included.
pub fn add_source(dt: f32, current: &mut [f32], previous: &[f32]) {
    debug_assert_eq!(current.len(), previous.len());
    for (value, source) in current.iter_mut().zip(previous) {
        *value += dt * source;
    }
}
