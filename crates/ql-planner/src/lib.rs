//! Compiles filter-language strings into parameterized SQL predicates.
//!
//! ```
//! let filter = ql_planner::compile("name:eq('abc'),age:range(16,32)", None).unwrap();
//!
//! assert_eq!(filter.query, "`name` = ? and `age` between ? and ?");
//! assert_eq!(filter.args.len(), 3);
//! ```

pub mod compiler;
pub mod config;
pub mod error;
pub mod ident;
pub mod operator;
pub mod policy;
pub mod validator;

pub use compiler::{CompiledFilter, CompiledPredicate, FilterCompiler, compile};
pub use config::{ConfigError, FilterConfig, Limits};
pub use error::{Arity, CompileError, ErrorKind, FilterError};
pub use operator::{ClauseContext, OperatorCompiler, OperatorRegistry};
pub use policy::{FieldPolicy, FieldRule, PolicyViolation, UnknownField};
pub use ql_syntax::Literal;
pub use validator::{BoxError, FieldRequest, FieldValidator, Verdict};
