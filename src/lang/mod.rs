mod ident;
pub use ident::*;

mod value;
pub use value::*;

mod node;
pub use node::*;

mod environment;
pub use environment::*;

mod reduce;
pub use reduce::{reduce, reducible, Reduction};

mod machine;
pub use machine::*;
