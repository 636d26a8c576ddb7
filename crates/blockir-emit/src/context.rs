use blockir_core::LibInfo;
use indexmap::IndexMap;

/// Argument names of functions defined by the program being lowered.
#[derive(Debug, Default)]
pub struct Scope {
    functions: IndexMap<String, Vec<String>>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, params: Vec<String>) {
        self.functions.insert(name, params);
    }

    pub fn lookup(&self, name: &str) -> Option<&[String]> {
        self.functions.get(name).map(Vec::as_slice)
    }
}

/// State of one `transpile` or `bundle` call.
///
/// The descriptor is only read. Functions the program defines live in a stack
/// of scopes, one per open suite or nested statement body, and shadow descriptor
/// entries of the same name.
#[derive(Debug)]
pub struct LoweringContext<'a> {
    info: &'a LibInfo,
    scope_stack: Vec<Scope>,
    loop_depth: usize,
}

impl<'a> LoweringContext<'a> {
    pub fn new(info: &'a LibInfo) -> Self {
        Self {
            info,
            scope_stack: vec![Scope::new()],
            loop_depth: 0,
        }
    }

    pub fn push_scope(&mut self) {
        self.scope_stack.push(Scope::new());
    }

    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
    }

    pub fn register_function(&mut self, name: &str, params: Vec<String>) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), params);
        }
    }

    /// Declared argument names of `func`, innermost definition first, then the descriptor.
    pub fn args_of(&self, func: &str) -> Option<Vec<String>> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.lookup(func))
            .or_else(|| self.info.args_of(func))
            .map(<[String]>::to_vec)
    }

    pub fn create_args_of(&self, ty: &str) -> Option<&'a [String]> {
        self.info.create_args_of(ty)
    }

    pub fn typevars_of(&self, ty: &str) -> Option<&'a [String]> {
        self.info.typevars_of(ty)
    }

    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub fn exit_loop(&mut self) {
        if self.loop_depth > 0 {
            self.loop_depth -= 1;
        }
    }

    /// Starts a function body, which is never inside a loop body of its own.
    /// Returns the depth to hand back to [`exit_function`](Self::exit_function).
    pub fn enter_function(&mut self) -> usize {
        std::mem::replace(&mut self.loop_depth, 0)
    }

    pub fn exit_function(&mut self, saved_depth: usize) {
        self.loop_depth = saved_depth;
    }
}
