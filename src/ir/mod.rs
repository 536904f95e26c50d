//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for label printing. The IR is a
//! line-per-op representation that sits between declarative label
//! components and raw ZPL text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │ Components  │ ──► │     IR      │ ──► │ Codegen  │ ──► ZPL text
//! │(declarative)│     │  (Vec<Op>)  │     │          │
//! └─────────────┘     └─────────────┘     └──────────┘
//!                            ▲
//!                            └──── Parser ◄── ZPL text
//! ```
//!
//! ## Example
//!
//! ```
//! use etiqueta::ir::{Op, Program};
//!
//! let mut program = Program::new();
//! program.push(Op::StartFormat);
//! program.push(Op::PrintWidth(320));
//! program.push(Op::LabelLength(160));
//! program.push(Op::EndFormat);
//!
//! let zpl = program.to_zpl();
//! assert_eq!(zpl, "^XA\n^PW320\n^LL160\n^XZ");
//! assert_eq!(Program::parse(&zpl), program);
//! ```

mod codegen;
mod ops;
mod parse;

pub use ops::*;
pub use parse::parse_line;
