use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use izon_di::{
    class_id, expression, object, reference, scalar, Arguments, Constructible, Container,
    DefaultValueResolver, ExplicitArgumentResolver, Invocation, NotFoundError,
    Parameter, ResolveError, ResolverChain, Signature,
};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Logger {
    channel: String,
}
impl Constructible for Logger {
    fn signature() -> Signature {
        Signature::new().param(Parameter::builtin("channel", "string").with_default("app".to_string()))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        Ok(Logger {
            channel: arguments.cloned("channel")?,
        })
    }
}

struct Cache;

struct Repository {
    logger: Arc<Logger>,
    cache: Option<Arc<Cache>>,
}
impl Constructible for Repository {
    fn signature() -> Signature {
        Signature::new()
            .param(Parameter::class::<Logger>("logger"))
            .param(Parameter::class::<Cache>("cache").with_default(Option::<Arc<Cache>>::None))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        // The default is an `Option`, a registered cache arrives as `Cache`
        let cache = match arguments.optional::<Cache>("cache") {
            Ok(cache) => cache,
            Err(_) => arguments.cloned::<Option<Arc<Cache>>>("cache")?,
        };

        Ok(Repository {
            logger: arguments.get("logger")?,
            cache,
        })
    }
}

struct Mailer {
    dsn: String,
}
impl Constructible for Mailer {
    fn signature() -> Signature {
        Signature::new().param(Parameter::builtin("dsn", "string"))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        Ok(Mailer {
            dsn: arguments.cloned("dsn")?,
        })
    }
}

struct Newsletter {
    mailer: Option<Arc<Mailer>>,
}
impl Constructible for Newsletter {
    fn signature() -> Signature {
        Signature::new()
            .param(Parameter::class::<Mailer>("mailer").with_default(Option::<Arc<Mailer>>::None))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        let mailer = match arguments.optional::<Mailer>("mailer") {
            Ok(mailer) => mailer,
            Err(_) => arguments.cloned::<Option<Arc<Mailer>>>("mailer")?,
        };

        Ok(Newsletter { mailer })
    }
}

struct Campaign {
    _mailer: Arc<Mailer>,
}
impl Constructible for Campaign {
    fn signature() -> Signature {
        Signature::new().param(Parameter::class::<Mailer>("mailer"))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        Ok(Campaign {
            _mailer: arguments.get("mailer")?,
        })
    }
}

#[test]
fn greeting_scenario() {
    let container = Container::new([("greeting", scalar("hello".to_string()))]);

    assert_eq!(container.require::<String>("greeting").unwrap().as_str(), "hello");
    assert!(!container.has("missing"));
    let error = container.get("missing").unwrap_err();
    assert!(matches!(error, ResolveError::NotFound(NotFoundError { ref id }) if id == "missing"));
}

#[test]
fn unknown_ids_are_absent() {
    let container = Container::new([("a", scalar(1_u8))]);

    for id in ["b", "A", "", "a "] {
        assert!(!container.has(id));
        assert!(container.get(id).unwrap_err().is_not_found());
    }
}

#[test]
fn get_runs_the_definition_against_the_container() {
    let definition = expression(|container| {
        let base = container.require::<u32>("base")?;
        Ok(*base * 2)
    });
    let container = Container::new([("base", scalar(21_u32)), ("double", definition.clone())]);

    let direct = definition.define(&container).unwrap();
    let via_get = container.get("double").unwrap();

    assert_eq!(*direct.downcast::<u32>().unwrap(), 42);
    assert_eq!(*via_get.downcast::<u32>().unwrap(), 42);
}

#[test]
fn latest_add_wins() {
    let mut container = Container::default();
    container.add("x", scalar("first".to_string()));
    container.add("x", scalar("second".to_string()));

    assert_eq!(container.require::<String>("x").unwrap().as_str(), "second");
    assert_eq!(container.len(), 1);
}

#[test]
fn objects_are_built_per_call() {
    let container = Container::new([("Logger", object::<Logger>(Arguments::new()))]);

    let first = container.require::<Logger>("Logger").unwrap();
    let second = container.require::<Logger>("Logger").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.channel, "app");
}

#[test]
fn scalars_are_shared_between_calls() {
    let container = Container::new([("Logger", scalar(Logger { channel: "db".into() }))]);

    let first = container.require::<Logger>("Logger").unwrap();
    let second = container.require::<Logger>("Logger").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn expressions_run_once_per_get() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let container = Container::new([(
        "id",
        expression(move |_| Ok(counter.fetch_add(1, Ordering::SeqCst))),
    )]);

    let ids: Vec<usize> = (0..3)
        .map(|_| *container.require::<usize>("id").unwrap())
        .collect();

    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn class_hint_uses_the_registered_type() {
    let container = Container::new([
        (
            class_id::<Logger>(),
            object::<Logger>(Arguments::new().with_value("channel", "repo".to_string())),
        ),
        (class_id::<Cache>(), scalar(Cache)),
        (class_id::<Repository>(), object::<Repository>(Arguments::new())),
    ]);

    let repository = container
        .require::<Repository>(&class_id::<Repository>())
        .unwrap();

    assert_eq!(repository.logger.channel, "repo");
    assert!(repository.cache.is_some());
}

#[test]
fn class_hint_falls_back_to_the_default() {
    let container = Container::new([
        (class_id::<Logger>(), object::<Logger>(Arguments::new())),
        (class_id::<Repository>(), object::<Repository>(Arguments::new())),
    ]);

    let repository = container
        .require::<Repository>(&class_id::<Repository>())
        .unwrap();

    assert!(repository.cache.is_none());
}

#[test]
fn class_hint_falls_back_when_the_class_cannot_be_built() {
    // `Mailer` is registered, but its `dsn` cannot be resolved
    let container = Container::new([
        (class_id::<Mailer>(), object::<Mailer>(Arguments::new())),
        (class_id::<Newsletter>(), object::<Newsletter>(Arguments::new())),
    ]);

    assert!(container.get(&class_id::<Mailer>()).unwrap_err().is_dependency());
    let newsletter = container
        .require::<Newsletter>(&class_id::<Newsletter>())
        .unwrap();
    assert!(newsletter.mailer.is_none());

    let container = Container::new([
        (
            class_id::<Mailer>(),
            object::<Mailer>(Arguments::new().with_value("dsn", "smtp://localhost".to_string())),
        ),
        (class_id::<Newsletter>(), object::<Newsletter>(Arguments::new())),
    ]);

    let newsletter = container
        .require::<Newsletter>(&class_id::<Newsletter>())
        .unwrap();
    assert_eq!(newsletter.mailer.as_ref().unwrap().dsn, "smtp://localhost");
}

#[test]
fn failing_class_hint_names_the_enclosing_constructor() {
    let container = Container::new([
        (class_id::<Mailer>(), object::<Mailer>(Arguments::new())),
        (class_id::<Campaign>(), object::<Campaign>(Arguments::new())),
    ]);

    let error = container.get(&class_id::<Campaign>()).unwrap_err();

    let ResolveError::Dependency(error) = error else {
        panic!("expected a dependency error");
    };
    assert_eq!(error.subject, "mailer");
    assert_eq!(error.target, class_id::<Campaign>());
    let Some(ResolveError::Dependency(cause)) = error.source.as_deref() else {
        panic!("expected the mailer failure as cause");
    };
    assert_eq!(cause.subject, "dsn");
    assert_eq!(cause.target, class_id::<Mailer>());
}

#[test]
fn class_hint_without_default_fails() {
    let container = Container::new([(class_id::<Repository>(), object::<Repository>(Arguments::new()))]);

    let error = container.get(&class_id::<Repository>()).unwrap_err();

    let ResolveError::Dependency(error) = error else {
        panic!("expected a dependency error");
    };
    assert_eq!(error.subject, "logger");
    assert_eq!(error.target, class_id::<Repository>());
    assert!(error.reason.contains(&class_id::<Logger>()));
    assert!(error.source.as_deref().is_some_and(ResolveError::is_not_found));
}

#[test]
fn explicit_arguments_beat_class_hints() {
    let container = Container::new([
        (class_id::<Logger>(), object::<Logger>(Arguments::new())),
        (
            "audit".to_string(),
            object::<Logger>(Arguments::new().with_value("channel", "audit".to_string())),
        ),
        (
            class_id::<Repository>(),
            object::<Repository>(Arguments::new().with_definition("logger", reference("audit"))),
        ),
    ]);

    let repository = container
        .require::<Repository>(&class_id::<Repository>())
        .unwrap();

    assert_eq!(repository.logger.channel, "audit");
}

#[test]
fn custom_resolver_chain() {
    // Without the class-name resolver class hints are never looked up
    let container = Container::builder()
        .resolvers(
            ResolverChain::empty()
                .with(ExplicitArgumentResolver)
                .with(DefaultValueResolver),
        )
        .add(class_id::<Logger>(), object::<Logger>(Arguments::new()))
        .add(class_id::<Repository>(), object::<Repository>(Arguments::new()))
        .build();

    let error = container.get(&class_id::<Repository>()).unwrap_err();

    let ResolveError::Dependency(error) = error else {
        panic!("expected a dependency error");
    };
    assert_eq!(error.subject, "logger");
    assert_eq!(error.target, class_id::<Repository>());
}

#[test]
fn cycles_are_reported_when_enabled() {
    let container = Container::builder()
        .detect_cycles(true)
        .add("a", reference("b"))
        .add("b", expression(|container| container.require::<u8>("a")))
        .build();

    let error = container.get("a").unwrap_err();

    let ResolveError::CircularDependency { chain } = error else {
        panic!("expected a circular dependency");
    };
    assert_eq!(chain, vec!["a", "b", "a"]);
}

#[test]
fn resolving_does_not_change_the_registry() {
    let container = Container::new([
        ("a", scalar(1_u8)),
        ("b", reference("a")),
        ("c", reference("missing")),
    ]);

    let _ = container.get("b");
    let _ = container.get("c");

    assert_eq!(container.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}
