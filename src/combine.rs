//! Ready-made combine functions for [`Fifo::reduce`](crate::Fifo::reduce).
//!
//! Each adder has the shape `fn(&element, &mut accumulator)`. Same-width
//! integer adders wrap on overflow; the widening adders let small elements
//! be summed into a wider accumulator without overflowing.
//!
//! ```
//! # use ringfifo::{combine, Fifo};
//! let mut buffer = [0i8; 4];
//! let mut fifo = Fifo::from_buffer(&mut buffer).unwrap();
//! fifo.push(100).unwrap();
//! fifo.push(100).unwrap();
//!
//! let mut sum = 0i8;
//! fifo.reduce(&mut sum, combine::add_i8);
//! assert_eq!(sum, 200u8 as i8);
//! ```

macro_rules! wrapping_adders {
    ($($name:ident: $element:ty => $acc:ty),* $(,)?) => {
        $(
            #[doc = concat!("Adds a `", stringify!($element), "` element to a `", stringify!($acc), "` sum, wrapping on overflow.")]
            pub fn $name(element: &$element, sum: &mut $acc) {
                *sum = sum.wrapping_add(<$acc>::from(*element));
            }
        )*
    };
}

macro_rules! float_adders {
    ($($name:ident: $element:ty => $acc:ty),* $(,)?) => {
        $(
            #[doc = concat!("Adds a `", stringify!($element), "` element to a `", stringify!($acc), "` sum.")]
            pub fn $name(element: &$element, sum: &mut $acc) {
                *sum += <$acc>::from(*element);
            }
        )*
    };
}

wrapping_adders! {
    add_i8: i8 => i8,
    add_u8: u8 => u8,
    add_i16: i16 => i16,
    add_u16: u16 => u16,
    add_i32: i32 => i32,
    add_u32: u32 => u32,
    add_i64: i64 => i64,
    add_u64: u64 => u64,
    add_i32_to_i64: i32 => i64,
    add_u32_to_u64: u32 => u64,
}

float_adders! {
    add_f32: f32 => f32,
    add_f64: f64 => f64,
    add_f32_to_f64: f32 => f64,
}

/// Adds an `i64` element to an `f64` sum. Large magnitudes lose precision.
#[allow(clippy::cast_precision_loss)]
pub fn add_i64_to_f64(element: &i64, sum: &mut f64) {
    *sum += *element as f64;
}

/// Adds a `u64` element to an `f64` sum. Large magnitudes lose precision.
#[allow(clippy::cast_precision_loss)]
pub fn add_u64_to_f64(element: &u64, sum: &mut f64) {
    *sum += *element as f64;
}
