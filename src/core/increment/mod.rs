use tracing::instrument;

/// In-place increment that yields the value held *before* the mutation.
pub trait PostIncrement {
    type Output;

    fn post_increment(&mut self) -> Self::Output;
}

/// In-place increment that yields a mutable reference once the mutation is
/// done.
///
/// `Target` is usually `Self`, but nothing stops an implementation from
/// handing out a reference to something else (a field, say). Such types are
/// not [`Incrementable`].
pub trait PreIncrement {
    type Target: ?Sized;

    fn pre_increment(&mut self) -> &mut Self::Target;
}

/// Types whose increment operators honour the full contract:
///
/// * post-increment yields something convertible back into `Self`;
/// * pre-increment yields exactly `&mut Self`.
///
/// Implemented automatically for every type meeting both conditions. A type
/// that misses either one is rejected at compile time wherever the bound is
/// required.
pub trait Incrementable:
    PreIncrement<Target = Self> + PostIncrement<Output: Into<Self>> + Sized
{
}

impl<T> Incrementable for T
where
    T: PreIncrement<Target = T> + PostIncrement,
    <T as PostIncrement>::Output: Into<T>,
{
}

/// Post-increments `x`, then pre-increments it, returning the reference the
/// pre-increment produced.
///
/// ```rust
/// # use incrementable::double_increment;
/// let mut x = 2;
/// assert_eq!(*double_increment(&mut x), 4);
/// assert_eq!(x, 4);
/// ```
///
/// A type whose pre-increment returns anything other than `&mut Self` does
/// not satisfy the bound:
///
/// ```compile_fail
/// # use incrementable::{double_increment, FieldCounter};
/// let mut counter = FieldCounter::default();
/// double_increment(&mut counter);
/// ```
///
/// Nor does one whose post-increment yields something that cannot be
/// converted back:
///
/// ```compile_fail
/// # use incrementable::{double_increment, PostIncrement, PreIncrement};
/// struct Opaque;
///
/// struct Dial(u8);
///
/// impl PostIncrement for Dial {
///     type Output = Opaque;
///
///     fn post_increment(&mut self) -> Opaque {
///         self.0 += 1;
///         Opaque
///     }
/// }
///
/// impl PreIncrement for Dial {
///     type Target = Dial;
///
///     fn pre_increment(&mut self) -> &mut Dial {
///         self.0 += 1;
///         self
///     }
/// }
///
/// let mut dial = Dial(0);
/// double_increment(&mut dial);
/// ```
#[instrument(name = "double_increment", level = "trace", skip(x))]
pub fn double_increment<T: Incrementable>(x: &mut T) -> &mut T {
    let _previous: T = x.post_increment().into();
    x.pre_increment()
}

macro_rules! increment_impl {
    ($one:expr => $($t:ty),*) => {
        $(
            impl PostIncrement for $t {
                type Output = $t;

                #[inline(always)]
                fn post_increment(&mut self) -> $t {
                    let previous = *self;
                    *self += $one;
                    previous
                }
            }

            impl PreIncrement for $t {
                type Target = $t;

                #[inline(always)]
                fn pre_increment(&mut self) -> &mut $t {
                    *self += $one;
                    self
                }
            }
        )*
    };
}

increment_impl!(1 => u8, u16, u32, u64, u128, usize);
increment_impl!(1 => i8, i16, i32, i64, i128, isize);
increment_impl!(1.0 => f32, f64);
