//! An implementation of the [MD4][1] cryptographic hash algorithm.
//!
//! MD4 is cryptographically broken; this crate exists for compatibility
//! with protocols and file formats that still mandate it, not for any
//! security purpose.
//!
//! # Usage
//!
//! ```rust
//! use md4::{Md4, Digest};
//! use hex_literal::hex;
//!
//! // create a Md4 hasher instance
//! let mut hasher = Md4::new();
//!
//! // process input message
//! hasher.update(b"abc");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 16]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("a448017aaf21d8525fc10ae87aa6729d")[..]);
//! ```
//!
//! The [`hash`] and [`hash_into`] functions compute a digest in one call,
//! reusing a per-thread engine instead of constructing a fresh one:
//!
//! ```rust
//! use hex_literal::hex;
//!
//! let digest = md4::hash(b"abc");
//! assert_eq!(digest[..], hex!("a448017aaf21d8525fc10ae87aa6729d")[..]);
//!
//! let mut out = [0u8; 16];
//! md4::hash_into(b"abc", &mut out).unwrap();
//! assert_eq!(out[..], digest[..]);
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/MD4
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest, InvalidBufferSize};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U16, U64},
    HashMarker, Output,
};

mod compress;
mod consts;

use crate::compress::compress;

/// Core MD4 hasher state.
#[derive(Clone)]
pub struct Md4Core {
    block_len: u64,
    state: [u32; 4],
}

impl HashMarker for Md4Core {}

impl BlockSizeUser for Md4Core {
    type BlockSize = U64;
}

impl BufferKindUser for Md4Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Md4Core {
    type OutputSize = U16;
}

impl UpdateCore for Md4Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        for block in blocks {
            compress(&mut self.state, block);
        }
    }
}

impl FixedOutputCore for Md4Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bit_len = self
            .block_len
            .wrapping_mul(Self::BlockSize::U64)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);
        let mut state = self.state;
        buffer.len64_padding_le(bit_len, |block| compress(&mut state, block));
        for (chunk, v) in out.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Default for Md4Core {
    #[inline]
    fn default() -> Self {
        Self {
            block_len: 0,
            state: consts::S0,
        }
    }
}

impl Reset for Md4Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Md4Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Md4")
    }
}

opaque_debug::implement!(Md4Core);

/// MD4 hasher state.
pub type Md4 = CoreWrapper<Md4Core>;

/// Runs `f` with this thread's shared engine, lazily created on first use.
#[cfg(feature = "std")]
fn with_shared_engine<R>(f: impl FnOnce(&mut Md4) -> R) -> R {
    use core::cell::RefCell;

    std::thread_local! {
        static ENGINE: RefCell<Md4> = RefCell::new(Md4::new());
    }

    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

/// Runs `f` with a fresh engine; without `std` there is no thread-local
/// storage to share one through.
#[cfg(not(feature = "std"))]
fn with_shared_engine<R>(f: impl FnOnce(&mut Md4) -> R) -> R {
    f(&mut Md4::new())
}

/// Computes the MD4 digest of `data`.
///
/// Equivalent to `Md4::digest(data)`, except that with the `std` feature
/// enabled the computation runs on an engine kept in thread-local storage.
/// The engine is reset before and after every call, so unrelated callers
/// on the same thread never observe each other's state.
pub fn hash(data: &[u8]) -> Output<Md4> {
    with_shared_engine(|engine| {
        Digest::reset(engine);
        Digest::update(engine, data);
        Digest::finalize_reset(engine)
    })
}

/// Computes the MD4 digest of `data` into the start of `out`.
///
/// Only the first 16 bytes of `out` are written; any excess is left
/// untouched. If `out` is shorter than the 16-byte digest, returns
/// [`InvalidBufferSize`] without writing anything. Uses the same shared
/// engine as [`hash`].
pub fn hash_into(data: &[u8], out: &mut [u8]) -> Result<(), InvalidBufferSize> {
    let out = out.get_mut(..U16::USIZE).ok_or(InvalidBufferSize)?;
    with_shared_engine(|engine| {
        Digest::reset(engine);
        Digest::update(engine, data);
        Digest::finalize_into_reset(engine, Output::<Md4>::from_mut_slice(out));
    });
    Ok(())
}
