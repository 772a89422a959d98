// Domain model: compiled bindings and the path template machinery behind them

pub mod binding;
pub mod template;

pub use binding::{
    BindingResolver, BodyExpr, CompiledBinding, MethodStub, RequestParts, ResolveFailure,
};
