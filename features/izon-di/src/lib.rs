//! Izon is a small dependency injection container.
//!
//! A [`Container`] maps identifiers to definitions, recipes that produce a
//! value when the identifier is requested. Definitions are run again on every
//! lookup, nothing is cached.
//!
//! The crate consists of the following parts:
//!
//! 1. Container - the registry and the [`Container::get`] entry point
//! 2. Definitions - scalar values, expressions, reflected object construction and method calls
//! 3. Resolvers - the parameter resolver chain and the structure resolver used for explicit arguments
//!
//! Rust has no runtime reflection, so constructors and methods describe their
//! parameters through a [`Signature`] (see [`Constructible`] and [`Reflect`]).
//!
//! # Examples
//!
//! ```rust
//! use izon_di::{class_id, object, reference, scalar, Arguments, Constructible, Container,
//!     Invocation, Parameter, ResolveError, Signature};
//!
//! struct Greeter {
//!     greeting: String,
//! }
//! impl Constructible for Greeter {
//!     fn signature() -> Signature {
//!         Signature::new().param(Parameter::builtin("greeting", "string"))
//!     }
//!
//!     fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
//!         Ok(Greeter { greeting: arguments.cloned("greeting")? })
//!     }
//! }
//!
//! let container = Container::new([
//!     ("greeting".to_string(), scalar("hello".to_string())),
//!     (
//!         class_id::<Greeter>(),
//!         object::<Greeter>(Arguments::new().with_definition("greeting", reference("greeting"))),
//!     ),
//! ]);
//!
//! let greeter = container.require::<Greeter>(&class_id::<Greeter>()).unwrap();
//! assert_eq!(greeter.greeting, "hello");
//! assert!(!container.has("missing"));
//! assert!(container.get("missing").unwrap_err().is_not_found());
//! ```

pub mod arguments;
pub mod builder;
pub mod container;
pub mod definition;
pub mod errors;
pub mod functions;
pub mod parameter;
pub mod resolver;
mod stack;
pub mod types;

pub use arguments::{ArgumentKey, Arguments, Entry, ResolvedArguments};
pub use builder::ContainerBuilder;
pub use container::Container;
pub use definition::{
    Constructible, Definition, ExpressionDefinition, MethodDefinition, MethodKind,
    MethodSignature, MethodTarget, ObjectDefinition, ReferenceDefinition, Reflect,
    ScalarDefinition, SharedDefinition,
};
pub use errors::{DependencyError, InvalidArgumentError, NotFoundError, ResolveError};
pub use functions::{expression, method, object, reference, scalar};
pub use parameter::{class_id, DeclaredType, Invocation, Parameter, Signature};
pub use resolver::{
    ClassNameResolver, DefaultValueResolver, ExplicitArgumentResolver, ParameterResolver,
    ResolverChain, StructureResolver, ValueResolver,
};
pub use types::{DynError, Injectable, Instance, TypeInfo};
