use crate::{
    config::TranspilerConfig,
    context::LoweringContext,
    emitter::EmitContext,
    errors::{TranspileError, TranspileResult},
    escape::escape_cpp,
};
use blockir_core::{
    Argument, Assign, Block, Branch, Call, Case, Create, Declaration, DefaultCase, Do, Expr,
    Foreach, Func, LibInfo, Num, PolymorphicType, Return, Stmt, Str, Suite, Type, While,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Lowers Block trees into C++ source against one binding descriptor.
///
/// A transpiler holds no per-call state: every `transpile` or `bundle` call
/// starts from the descriptor alone, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Transpiler {
    info: LibInfo,
    config: TranspilerConfig,
}

impl Transpiler {
    pub fn new(info: LibInfo) -> Self {
        Self::with_config(info, TranspilerConfig::default())
    }

    pub fn with_config(info: LibInfo, config: TranspilerConfig) -> Self {
        Self { info, config }
    }

    pub fn info(&self) -> &LibInfo {
        &self.info
    }

    pub fn config(&self) -> &TranspilerConfig {
        &self.config
    }

    /// Lowers one node and everything below it.
    pub fn transpile(&self, block: &Block) -> TranspileResult<String> {
        self.lowering().block(block)
    }

    /// A complete translation unit: includes, prelude, then `root` inside the entry point.
    pub fn bundle(&self, root: &Block) -> TranspileResult<String> {
        debug!(
            includes = self.info.includes.len(),
            prelude_len = self.info.lib.len(),
            "bundling program"
        );
        let body = self.transpile(root)?;

        let mut output = String::new();
        for include in &self.info.includes {
            output.push_str(&format!("#include <{}>\n", include));
        }
        output.push_str(&self.info.lib);
        if !self.info.lib.is_empty() && !self.info.lib.ends_with('\n') {
            output.push('\n');
        }
        let emit = EmitContext::new(&self.config.indent);
        output.push_str(&emit.braced(&self.config.entry_point, &body));
        output.push('\n');
        Ok(output)
    }

    fn lowering(&self) -> Lowering<'_> {
        Lowering {
            ctx: LoweringContext::new(&self.info),
            emit: EmitContext::new(&self.config.indent),
        }
    }
}

/// Expressions that can be evaluated in any order, any number of times.
fn is_pure(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Num(_) | Expr::Str(_) | Expr::Identifier(_) | Expr::Func(_)
    )
}

/// Positions in `args` of each declared name, in declared order.
fn resolve_arguments(
    declared: &[String],
    args: &[Argument],
    node: impl Fn() -> String,
) -> TranspileResult<Vec<usize>> {
    let mut positions: IndexMap<&str, usize> = IndexMap::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        if positions.insert(arg.name.id.as_str(), i).is_some() {
            return Err(TranspileError::DuplicateArgument {
                name: arg.name.id.clone(),
                node: node(),
            });
        }
    }

    declared
        .iter()
        .map(|name| {
            positions
                .get(name.as_str())
                .copied()
                .ok_or_else(|| TranspileError::MissingArgument {
                    name: name.clone(),
                    node: node(),
                })
        })
        .collect()
}

struct Lowering<'a> {
    ctx: LoweringContext<'a>,
    emit: EmitContext,
}

impl<'a> Lowering<'a> {
    fn block(&mut self, block: &Block) -> TranspileResult<String> {
        match block {
            Block::TypeIdentifier(ty) => Ok(ty.id.clone()),
            Block::TypeArgument(arg) => self.ty(&arg.ty),
            Block::PolymorphicType(ty) => self.polymorphic(ty),
            Block::Num(num) => Ok(lower_num(num)),
            Block::Str(s) => Ok(lower_str(s)),
            Block::Identifier(id) => Ok(id.id.clone()),
            Block::Declaration(decl) => self.declaration(decl),
            Block::Func(func) => self.func(func),
            Block::Argument(arg) => self.expr(&arg.value),
            Block::Create(create) => self.create(create),
            Block::Call(call) => self.call(call),
            Block::Assign(assign) => self.assign(assign),
            Block::Do(stmt) => self.do_stmt(stmt),
            Block::Foreach(stmt) => self.foreach(stmt),
            Block::While(stmt) => self.while_stmt(stmt),
            Block::Branch(branch) => self.branch(branch),
            Block::Case(case) => self.case(case),
            Block::Default(default) => self.default_case(default),
            Block::Return(ret) => self.ret(ret),
            Block::Break => Ok(self.jump(true)),
            Block::Continue => Ok(self.jump(false)),
            Block::Suite(suite) => self.suite(suite),
        }
    }

    fn ty(&mut self, ty: &Type) -> TranspileResult<String> {
        match ty {
            Type::Identifier(ty) => Ok(ty.id.clone()),
            Type::Polymorphic(ty) => self.polymorphic(ty),
        }
    }

    /// Type parameters are emitted in the descriptor's order, whatever order the tree lists them in.
    fn polymorphic(&mut self, ty: &PolymorphicType) -> TranspileResult<String> {
        let name = ty.id.id.as_str();
        let declared = self
            .ctx
            .typevars_of(name)
            .ok_or_else(|| TranspileError::UnknownType {
                name: name.to_string(),
                node: ty.to_string(),
            })?;
        if let Some(duplicate) = ty.duplicate_typevar() {
            return Err(TranspileError::DuplicateTypeArgument {
                name: duplicate.to_string(),
                node: ty.to_string(),
            });
        }

        let mut params = Vec::with_capacity(declared.len());
        for param in declared {
            let arg = ty
                .typevar(param)
                .ok_or_else(|| TranspileError::MissingTypeArgument {
                    name: param.clone(),
                    node: ty.to_string(),
                })?;
            params.push(self.ty(&arg.ty)?);
        }
        Ok(format!("{}<{}>", name, params.join(", ")))
    }

    fn expr(&mut self, expr: &Expr) -> TranspileResult<String> {
        match expr {
            Expr::Num(num) => Ok(lower_num(num)),
            Expr::Str(s) => Ok(lower_str(s)),
            Expr::Identifier(id) => Ok(id.id.clone()),
            Expr::Func(func) => self.func(func),
            Expr::Create(create) => self.create(create),
            Expr::Call(call) => self.call(call),
        }
    }

    fn declaration(&mut self, decl: &Declaration) -> TranspileResult<String> {
        Ok(format!("{} &{}", self.ty(&decl.ty)?, decl.arg.id))
    }

    fn declarations(&mut self, decls: &[Declaration]) -> TranspileResult<Vec<String>> {
        decls.iter().map(|decl| self.declaration(decl)).collect()
    }

    fn func(&mut self, func: &Func) -> TranspileResult<String> {
        let header = format!(
            "[&]({}) -> {}",
            self.declarations(&func.decls)?.join(", "),
            self.ty(&func.return_type)?
        );
        let body = self.function_body(&func.body)?;
        Ok(self.emit.braced(&header, &body))
    }

    fn function_body(&mut self, body: &Stmt) -> TranspileResult<String> {
        let saved = self.ctx.enter_function();
        let lowered = self.nested(body);
        self.ctx.exit_function(saved);
        lowered
    }

    fn create(&mut self, create: &Create) -> TranspileResult<String> {
        let name = create.ty.name();
        let declared = self
            .ctx
            .create_args_of(name)
            .ok_or_else(|| TranspileError::UnknownType {
                name: name.to_string(),
                node: create.to_string(),
            })?;
        let order = resolve_arguments(declared, &create.args, || create.to_string())?;
        let head = self.ty(&create.ty)?;
        self.apply(&create.args, &order, |args| format!("{}{{{}}}", head, args))
    }

    fn call(&mut self, call: &Call) -> TranspileResult<String> {
        let name = call.func.id.as_str();
        let declared = self
            .ctx
            .args_of(name)
            .ok_or_else(|| TranspileError::UnknownFunction {
                name: name.to_string(),
                node: call.to_string(),
            })?;
        let order = resolve_arguments(&declared, &call.args, || call.to_string())?;
        self.apply(&call.args, &order, |args| format!("{}({})", name, args))
    }

    /// Passes `args` to a callee in declared order while evaluating them in
    /// occurrence order. Unless reordering is unobservable, every argument is
    /// bound to `_a<position>` inside an immediately invoked closure first.
    fn apply(
        &mut self,
        args: &[Argument],
        order: &[usize],
        callee: impl FnOnce(String) -> String,
    ) -> TranspileResult<String> {
        let all_passed = order.len() == args.len();
        let direct = (all_passed && args.len() <= 1) || args.iter().all(|arg| is_pure(&arg.value));
        if direct {
            let passed = order
                .iter()
                .map(|&i| self.expr(&args[i].value))
                .collect::<TranspileResult<Vec<_>>>()?;
            return Ok(format!("({})", callee(passed.join(", "))));
        }

        let mut body = String::new();
        for (i, arg) in args.iter().enumerate() {
            body.push_str(&format!("auto &&_a{} = {};\n", i, self.expr(&arg.value)?));
        }
        let passed: Vec<String> = order.iter().map(|i| format!("_a{}", i)).collect();
        body.push_str(&format!("return {};\n", callee(passed.join(", "))));
        Ok(format!(
            "({}())",
            self.emit.braced("[&]() -> decltype(auto)", &body)
        ))
    }

    fn stmt(&mut self, stmt: &Stmt) -> TranspileResult<String> {
        match stmt {
            Stmt::Assign(assign) => self.assign(assign),
            Stmt::Do(stmt) => self.do_stmt(stmt),
            Stmt::Foreach(stmt) => self.foreach(stmt),
            Stmt::While(stmt) => self.while_stmt(stmt),
            Stmt::Branch(branch) => self.branch(branch),
            Stmt::Return(ret) => self.ret(ret),
            Stmt::Break => Ok(self.jump(true)),
            Stmt::Continue => Ok(self.jump(false)),
            Stmt::Suite(suite) => self.suite(suite),
        }
    }

    /// A statement that forms the whole body of a branch, loop or function.
    /// Functions it defines end with it, like the C++ block it lowers to.
    fn nested(&mut self, stmt: &Stmt) -> TranspileResult<String> {
        self.ctx.push_scope();
        let lowered = self.stmt(stmt);
        self.ctx.pop_scope();
        lowered
    }

    fn assign(&mut self, assign: &Assign) -> TranspileResult<String> {
        trace!(lhs = %assign.lhs.id, is_define = assign.is_define, "lowering Assign");
        let lhs = assign.lhs.id.as_str();
        if !assign.is_define {
            return Ok(format!("{} = {};\n", lhs, self.expr(&assign.rhs)?));
        }
        match assign.rhs.as_func() {
            Some(func) => self.recursive_function(lhs, func),
            None => Ok(format!("auto {} = {};\n", lhs, self.expr(&assign.rhs)?)),
        }
    }

    /// Defines `name` through a fixed point: `_name` takes itself as a trailing
    /// parameter, and both the body and the public `name` call it through that.
    fn recursive_function(&mut self, name: &str, func: &Func) -> TranspileResult<String> {
        let params: Vec<String> = func.param_names().map(str::to_string).collect();
        debug!(function = name, params = ?params, "registering program function");
        self.ctx.register_function(name, params.clone());

        let decls = self.declarations(&func.decls)?;
        let ret = self.ty(&func.return_type)?;
        let fixed = format!("_{}", name);

        let mut forwarded = params;
        forwarded.push(fixed.clone());
        let public = self.emit.braced(
            &format!("[&]({}) -> {}", decls.join(", "), ret),
            &format!("return {}({});", fixed, forwarded.join(", ")),
        );

        let mut fixed_decls = decls;
        fixed_decls.push(format!("auto {}", fixed));
        let body = self.function_body(&func.body)?;
        let fixed_fn = self.emit.braced(
            &format!("[&]({}) -> {}", fixed_decls.join(", "), ret),
            &format!("auto {} = {};\n{}", name, public, body),
        );

        Ok(format!(
            "auto {} = {};\nauto {} = {};\n",
            fixed, fixed_fn, name, public
        ))
    }

    fn do_stmt(&mut self, stmt: &Do) -> TranspileResult<String> {
        trace!("lowering Do");
        Ok(format!("{};\n", self.expr(&stmt.expr)?))
    }

    /// Loop bodies become `bool` callbacks: `true` stops the loop, `false` keeps it going.
    fn loop_body(&mut self, body: &Stmt) -> TranspileResult<String> {
        self.ctx.enter_loop();
        let lowered = self.nested(body);
        self.ctx.exit_loop();
        Ok(format!("{}return false;\n", lowered?))
    }

    fn foreach(&mut self, stmt: &Foreach) -> TranspileResult<String> {
        trace!(id = %stmt.id.id, "lowering Foreach");
        let iterable = self.expr(&stmt.iterable)?;
        let body = self.loop_body(&stmt.body)?;
        let callback = self
            .emit
            .braced(&format!("[&](auto &{}) -> bool", stmt.id.id), &body);
        Ok(format!("foreach({}, {});\n", iterable, callback))
    }

    fn while_stmt(&mut self, stmt: &While) -> TranspileResult<String> {
        trace!("lowering While");
        let cond = self.expr(&stmt.cond)?;
        let body = self.loop_body(&stmt.body)?;
        let callback = self.emit.braced("[&]() -> bool", &body);
        Ok(format!(
            "loop_while([&]() {{ return {}; }}, {});\n",
            cond, callback
        ))
    }

    fn branch(&mut self, branch: &Branch) -> TranspileResult<String> {
        trace!(cases = branch.cases.len(), "lowering Branch");
        let mut output = String::from("if (false) {}\n");
        for case in &branch.cases {
            output.push_str(&self.case(case)?);
        }
        if let Some(default) = &branch.default {
            output.push_str(&self.default_case(default)?);
        }
        Ok(output)
    }

    fn case(&mut self, case: &Case) -> TranspileResult<String> {
        let cond = self.expr(&case.cond)?;
        let body = self.nested(&case.body)?;
        Ok(format!(
            "{}\n",
            self.emit.braced(&format!("else if ({})", cond), &body)
        ))
    }

    fn default_case(&mut self, default: &DefaultCase) -> TranspileResult<String> {
        let body = self.nested(&default.body)?;
        Ok(format!("{}\n", self.emit.braced("else", &body)))
    }

    fn ret(&mut self, ret: &Return) -> TranspileResult<String> {
        trace!("lowering Return");
        if self.ctx.in_loop() {
            return Err(TranspileError::ReturnInsideLoop {
                node: ret.to_string().trim_end().to_string(),
            });
        }
        match &ret.value {
            Some(value) => Ok(format!("return {};\n", self.expr(value)?)),
            None => Ok("return;\n".to_string()),
        }
    }

    fn jump(&self, stop: bool) -> String {
        trace!(stop, "lowering loop jump");
        match (self.ctx.in_loop(), stop) {
            (true, true) => "return true;\n",
            (true, false) => "return false;\n",
            (false, true) => "break;\n",
            (false, false) => "continue;\n",
        }
        .to_string()
    }

    fn suite(&mut self, suite: &Suite) -> TranspileResult<String> {
        trace!(stmts = suite.stmts.len(), "lowering Suite");
        self.ctx.push_scope();
        let lowered: TranspileResult<Vec<String>> =
            suite.stmts.iter().map(|stmt| self.stmt(stmt)).collect();
        self.ctx.pop_scope();
        Ok(lowered?.concat())
    }
}

fn lower_num(num: &Num) -> String {
    if num.is_float {
        format!("Float({})", num.value)
    } else {
        format!("Integer({}L)", num.value)
    }
}

fn lower_str(s: &Str) -> String {
    format!("String(\"{}\")", escape_cpp(&s.value))
}
