//! Minimal local stand-in for the upstream `masking` crate.
//!
//! The workspace depends on `masking` from the hyperswitch git repository,
//! which is not reachable in this build environment. This crate provides the
//! small subset of that crate's API that the workspace actually uses —
//! `Secret<T>` and `PeekInterface` — with the same transparent serde behavior
//! so deserialization and `peek()` observe the inner value unchanged.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Wrapper that keeps a value out of casual view while leaving it fully
/// accessible through [`PeekInterface`]/[`ExposeInterface`].
///
/// Serialization is transparent: a `Secret<T>` serializes and deserializes
/// exactly as the inner `T` does.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret<T, S = ()>(pub T, #[serde(skip)] PhantomData<S>);

impl<T, S> Secret<T, S> {
    /// Wrap a value.
    pub fn new(value: T) -> Self {
        Self(value, PhantomData)
    }
}

impl<T, S> From<T> for Secret<T, S> {
    fn from(value: T) -> Self {
        Self(value, PhantomData)
    }
}

impl<T: Default, S> Default for Secret<T, S> {
    fn default() -> Self {
        Self(T::default(), PhantomData)
    }
}

/// Borrow the inner value without consuming the secret.
pub trait PeekInterface<T> {
    fn peek(&self) -> &T;
}

impl<T, S> PeekInterface<T> for Secret<T, S> {
    fn peek(&self) -> &T {
        &self.0
    }
}

/// Consume the secret and take ownership of the inner value.
pub trait ExposeInterface<T> {
    fn expose(self) -> T;
}

impl<T, S> ExposeInterface<T> for Secret<T, S> {
    fn expose(self) -> T {
        self.0
    }
}
