use std::sync::Arc;

use izon_di::{
    class_id, expression, method, object, reference, scalar, Arguments, Constructible,
    Container, Invocation, MethodSignature, MethodTarget, Parameter, Reflect, ResolveError,
    Signature,
};

fn main() -> Result<(), ResolveError> {
    let container = Container::builder()
        .detect_cycles(true)
        .add("site.name", scalar("My Blog".to_string()))
        .add(class_id::<Logger>(), object::<Logger>(Arguments::new()))
        .add(
            class_id::<PluginHost>(),
            object::<PluginHost>(
                Arguments::new().with_definition("site_name", reference("site.name")),
            ),
        )
        .add(
            "plugins.loaded",
            method::<PluginHost>(
                MethodTarget::Definition(reference(class_id::<PluginHost>())),
                "load",
                Arguments::new().with_value("plugins", vec!["seo", "comments"]),
            ),
        )
        .add(
            "banner",
            expression(|container| {
                let name = container.require::<String>("site.name")?;
                Ok(format!("Welcome to {name}"))
            }),
        )
        .build();

    println!("{:?}", container);
    println!("{}", container.require::<String>("banner")?);
    let loaded = container.require::<Vec<String>>("plugins.loaded")?;
    println!("{:?}", loaded);
    Ok(())
}

#[derive(Debug)]
struct Logger;
impl Constructible for Logger {
    fn signature() -> Signature {
        Signature::new()
    }

    fn construct(_arguments: Invocation) -> Result<Self, ResolveError> {
        Ok(Logger)
    }
}
impl Logger {
    fn log(&self, message: &str) {
        println!("[log] {message}");
    }
}

#[derive(Debug)]
struct PluginHost {
    logger: Arc<Logger>,
    site_name: String,
}
impl Constructible for PluginHost {
    fn signature() -> Signature {
        Signature::new()
            .param(Parameter::class::<Logger>("logger"))
            .param(Parameter::builtin("site_name", "string"))
    }

    fn construct(arguments: Invocation) -> Result<Self, ResolveError> {
        Ok(PluginHost {
            logger: arguments.get("logger")?,
            site_name: arguments.cloned("site_name")?,
        })
    }
}
impl Reflect for PluginHost {
    fn method(name: &str) -> Option<MethodSignature<Self>> {
        match name {
            "load" => Some(MethodSignature::instance(
                Signature::new().param(Parameter::builtin("plugins", "array")),
                |host: &PluginHost, arguments| {
                    let plugins = arguments.get::<Vec<&'static str>>("plugins")?;
                    Ok(plugins
                        .iter()
                        .map(|plugin| {
                            host.logger.log(&format!("Loading {plugin} for {}", host.site_name));
                            plugin.to_string()
                        })
                        .collect::<Vec<String>>())
                },
            )),
            _ => None,
        }
    }
}
