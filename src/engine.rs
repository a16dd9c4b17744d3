use anyhow::{Context, Result};
use rhai::{Dynamic, Engine, Scope, AST};

use crate::config::HostConfig;
use crate::debug::{self, DebugConfig};
use crate::rhai_functions::register_all_functions;

#[derive(Clone)]
pub struct CompiledScript {
    ast: AST,
    source: String,
}

/// A Rhai engine with the string library installed.
pub struct ScriptEngine {
    engine: Engine,
    debug: DebugConfig,
}

impl ScriptEngine {
    pub fn new(host: &HostConfig) -> Self {
        Self::with_debug(host, DebugConfig::default())
    }

    pub fn with_debug(host: &HostConfig, debug: DebugConfig) -> Self {
        let mut engine = Engine::new();
        engine.set_optimization_level(rhai::OptimizationLevel::Simple);
        register_all_functions(&mut engine, host);

        debug.log_basic(&format!(
            "registered string functions under '{}'{}",
            host.namespace,
            if host.expose_globally {
                " and globally"
            } else {
                ""
            }
        ));

        Self { engine, debug }
    }

    pub fn compile(&self, script: &str) -> Result<CompiledScript> {
        self.debug
            .log_detail(&format!("compiling: {}", debug::preview(script)));
        let ast = self
            .engine
            .compile(script)
            .with_context(|| format!("Failed to compile script: {}", script))?;
        Ok(CompiledScript {
            ast,
            source: script.to_string(),
        })
    }

    /// Compiles and runs a script once, returning its final value.
    pub fn eval(&self, script: &str) -> Result<Dynamic> {
        let compiled = self.compile(script)?;
        self.eval_compiled(&compiled)
    }

    pub fn eval_compiled(&self, compiled: &CompiledScript) -> Result<Dynamic> {
        self.run(compiled, &mut Scope::new())
    }

    /// Runs a compiled script with `line` bound to one line of input.
    pub fn eval_line(&self, compiled: &CompiledScript, line: &str) -> Result<Dynamic> {
        let mut scope = Scope::new();
        scope.push("line", line.to_string());
        self.run(compiled, &mut scope)
    }

    fn run(&self, compiled: &CompiledScript, scope: &mut Scope) -> Result<Dynamic> {
        self.engine
            .eval_ast_with_scope::<Dynamic>(scope, &compiled.ast)
            .map_err(|e| anyhow::anyhow!("Failed to execute script '{}': {}", compiled.source, e))
    }
}
