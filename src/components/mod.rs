//! # Declarative Components
//!
//! Components describe *what* goes on a label row; compiling them yields the
//! IR, and building yields ZPL text.
//!
//! ```
//! use etiqueta::components::*;
//! use etiqueta::fields::LabelItem;
//! use etiqueta::layout::LayoutConfig;
//!
//! let items = vec![LabelItem::new("ABC123", "Produto Teste")];
//! let sheet = LabelSheet::new(&items, LayoutConfig::default());
//!
//! // Compile to IR (inspectable)
//! let ir = sheet.compile();
//! assert_eq!(ir.barcode_payloads(), vec!["ABC123"]);
//!
//! // Generate ZPL
//! let zpl = sheet.build();
//! assert!(zpl.starts_with("^XA\n^PW320\n^LL160"));
//! ```
//!
//! ## Component Trait
//!
//! All components implement the `Component` trait, which emits IR ops.
//! A [`LabelSheet`] contains one [`Label`] per rendered column.

mod label;

pub use label::*;

use crate::ir::{Op, Program};

/// Trait for declarative components.
pub trait Component {
    /// Emit IR ops for this component into the ops vector.
    fn emit(&self, ops: &mut Vec<Op>);
}

/// Extension trait for compiling components.
pub trait ComponentExt: Component {
    /// Compile this component to an IR program.
    ///
    /// The program is bracketed by `StartFormat` and `EndFormat`.
    fn compile(&self) -> Program {
        let mut ops = vec![Op::StartFormat];
        self.emit(&mut ops);
        ops.push(Op::EndFormat);
        Program { ops }
    }

    /// Compile and generate ZPL text.
    fn build(&self) -> String {
        self.compile().to_zpl()
    }
}

// Blanket implementation for all components
impl<T: Component> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ops: &mut Vec<Op>) {
        self.as_ref().emit(ops);
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ops: &mut Vec<Op>) {
        (*self).emit(ops);
    }
}
