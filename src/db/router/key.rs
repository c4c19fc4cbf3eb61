//! Canonical byte representation of keys for routing.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use super::hasher::RouteHasher;

/// A key that can be routed to a shard.
///
/// Implementations feed a canonical byte representation of the key into the
/// hasher. Like `Hash`, types related through `Borrow` must produce identical
/// bytes, so that looking up a `String` key by `&str` lands on the same shard.
pub trait RouteKey {
    fn write_route<H: RouteHasher>(&self, hasher: &mut H);
}

impl RouteKey for str {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        hasher.write(self.as_bytes());
    }
}

impl RouteKey for String {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        self.as_str().write_route(hasher);
    }
}

impl RouteKey for [u8] {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        hasher.write(self);
    }
}

impl RouteKey for Vec<u8> {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        self.as_slice().write_route(hasher);
    }
}

macro_rules! impl_route_key_int {
    ($($t:ty),*) => {
        $(
            impl RouteKey for $t {
                #[inline]
                fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
                    hasher.write(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_route_key_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl RouteKey for bool {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        hasher.write(&[*self as u8]);
    }
}

impl RouteKey for char {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        let mut buf = [0u8; 4];
        hasher.write(self.encode_utf8(&mut buf).as_bytes());
    }
}

impl<T: RouteKey + ?Sized> RouteKey for &T {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        (**self).write_route(hasher);
    }
}

impl<T: RouteKey + ?Sized> RouteKey for Box<T> {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        (**self).write_route(hasher);
    }
}

impl<T: RouteKey + ?Sized> RouteKey for Arc<T> {
    #[inline]
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        (**self).write_route(hasher);
    }
}

/// Routes any `Display` type by its textual rendering.
///
/// The rendering is prefixed with the type name, so `Rendered(1u8)` and
/// `Rendered("1")` do not share router input. Equality and hashing inside the
/// shard still come from `T` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rendered<T>(pub T);

const TYPE_TAG_SEPARATOR: u8 = 0xff;

impl<T: fmt::Display> RouteKey for Rendered<T> {
    fn write_route<H: RouteHasher>(&self, hasher: &mut H) {
        hasher.write(type_name::<T>().as_bytes());
        hasher.write(&[TYPE_TAG_SEPARATOR]);
        // Writing into the hasher never fails.
        let _ = fmt::write(&mut HasherWriter(hasher), format_args!("{}", self.0));
    }
}

struct HasherWriter<'a, H>(&'a mut H);

impl<H: RouteHasher> fmt::Write for HasherWriter<'_, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write(s.as_bytes());
        Ok(())
    }
}
