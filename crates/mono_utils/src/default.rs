/// An ergonomic abbreviation for [`Default::default()`] to make initializing
/// structs easier.
///
/// # Example
///
/// ```
/// use mono_utils::default;
///
/// #[derive(Default)]
/// struct Payload {
///   x: i32,
///   y: i32,
///   z: i32,
/// }
///
/// let payload = Payload {
///   x: 10,
///   ..default()
/// };
/// assert_eq!(payload.y, 0);
/// ```
#[inline(always)]
pub fn default<T: Default>() -> T {
    T::default()
}
