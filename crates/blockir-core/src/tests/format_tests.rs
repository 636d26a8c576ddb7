use super::sample_program;
use crate::*;
use pretty_assertions::assert_eq;

#[test]
fn test_type_identifier() {
    assert_eq!(TypeIdentifier::new("int").to_string(), "#int");
}

#[test]
fn test_polymorphic_type() {
    let ty = PolymorphicType::new(
        "map",
        vec![
            TypeArgument::new("K", "int"),
            TypeArgument::new("V", "string"),
        ],
    );
    assert_eq!(ty.to_string(), "#map<K=#int,V=#string>");
}

#[test]
fn test_num() {
    assert_eq!(Num::int("10").to_string(), "i10");
    assert_eq!(Num::float("10").to_string(), "f10");
}

#[test]
fn test_str_is_not_escaped() {
    assert_eq!(Str::new("10").to_string(), "\"10\"");
    assert_eq!(Str::new("a\"b").to_string(), "\"a\"b\"");
}

#[test]
fn test_identifier() {
    assert_eq!(Identifier::new("x").to_string(), "$x");
}

#[test]
fn test_declaration() {
    assert_eq!(Declaration::new("x", "y").to_string(), "$x:#y");
}

#[test]
fn test_func() {
    let func = Func::new(
        vec![Declaration::new("x", "y"), Declaration::new("z", "w")],
        "r",
        Do::new("p"),
    );
    assert_eq!(func.to_string(), "($x:#y,$z:#w)->#r{\n  do($p)\n}");
}

#[test]
fn test_nested_func_indents_per_level() {
    let inner = Func::new(vec![], "r", Do::new("p"));
    let outer = Func::new(vec![], "r", Do::new(inner));
    assert_eq!(
        outer.to_string(),
        "()->#r{\n  do(()->#r{\n    do($p)\n  })\n}"
    );
}

#[test]
fn test_call() {
    let call = Call::new(
        "f",
        vec![Argument::new("a0", "x"), Argument::new("a1", "y")],
    );
    assert_eq!(call.to_string(), "($f($a0=$x,$a1=$y))");
}

#[test]
fn test_create() {
    assert_eq!(Create::new("Integer", vec![]).to_string(), "(#Integer())");
    let create = Create::new("Integer", vec![Argument::new("n", Num::int("1"))]);
    assert_eq!(create.to_string(), "(#Integer($n=i1))");
}

#[test]
fn test_assign() {
    assert_eq!(Assign::define("x", "y").to_string(), "$x:=$y\n");
    assert_eq!(Assign::mutate("x", "y").to_string(), "$x<-$y\n");
}

#[test]
fn test_do() {
    assert_eq!(Do::new("x").to_string(), "do($x)\n");
}

#[test]
fn test_foreach() {
    let stmt = Foreach::new("x", "xs", Do::new("z"));
    assert_eq!(stmt.to_string(), "foreach($x<-$xs){\n  do($z)\n}\n");
}

#[test]
fn test_while() {
    let stmt = While::new("c", Do::new("z"));
    assert_eq!(stmt.to_string(), "while($c){\n  do($z)\n}\n");
}

#[test]
fn test_case_and_default() {
    assert_eq!(
        Case::new("cond", Do::new("x")).to_string(),
        "case($cond):\n  do($x)\n"
    );
    assert_eq!(
        DefaultCase::new(Do::new("x")).to_string(),
        "default:\n  do($x)\n"
    );
}

#[test]
fn test_branch() {
    let cases = vec![
        Case::new("cond0", Do::new("x")),
        Case::new("cond1", Do::new("y")),
    ];
    assert_eq!(
        Branch::new(cases.clone(), None).to_string(),
        "branch{\ncase($cond0):\n  do($x)\ncase($cond1):\n  do($y)\n}\n"
    );
    assert_eq!(
        Branch::new(cases, Some(DefaultCase::new(Do::new("z")))).to_string(),
        "branch{\ncase($cond0):\n  do($x)\ncase($cond1):\n  do($y)\ndefault:\n  do($z)\n}\n"
    );
}

#[test]
fn test_return() {
    assert_eq!(Return::value("x").to_string(), "return($x)\n");
    assert_eq!(Return::empty().to_string(), "return\n");
}

#[test]
fn test_break_and_continue() {
    assert_eq!(Block::Break.to_string(), "break\n");
    assert_eq!(Stmt::Continue.to_string(), "continue\n");
}

#[test]
fn test_suite() {
    let suite = Suite::new(vec![Do::new("x").into(), Return::empty().into()]);
    assert_eq!(suite.to_string(), "do($x)\nreturn\n");
}

#[test]
fn test_render_matches_display_and_is_stable() {
    let program = sample_program();
    let first = render(&program);
    assert_eq!(first, program.to_string());
    assert_eq!(first, render(&program.clone()));
}

#[test]
fn test_indent_helper() {
    assert_eq!(format::indent("a\nb\n"), "  a\n  b");
    assert_eq!(format::indent(""), "  ");
}
