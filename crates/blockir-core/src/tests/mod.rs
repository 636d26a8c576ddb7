/*! Test coverage for the IR tree, its printer and its codec.
 *
 * The printer and the codec are both total over the tree, so these tests lean on one sample
 * program that touches every node kind, plus focused cases for each rendering rule and each way
 * a wire value can be rejected.
 */

mod codec_tests;
mod format_tests;

use crate::*;

/// A program that uses every node kind at least once.
pub(crate) fn sample_program() -> Block {
    let map_type = PolymorphicType::new(
        "Map",
        vec![
            TypeArgument::new("V", "String"),
            TypeArgument::new("K", "Integer"),
        ],
    );
    let fact = Func::new(
        vec![Declaration::new("n", "Integer")],
        "Integer",
        Branch::new(
            vec![Case::new(
                Call::new(
                    "eq",
                    vec![Argument::new("lhs", "n"), Argument::new("rhs", Num::int("1"))],
                ),
                Return::value(Num::int("1")),
            )],
            Some(DefaultCase::new(Return::value(Call::new(
                "fact",
                vec![Argument::new("n", "n")],
            )))),
        ),
    );

    Suite::new(vec![
        Assign::define("fact", fact).into(),
        Assign::define("m", Create::new(map_type, vec![])).into(),
        Foreach::new(
            "x",
            Create::new("Range", vec![Argument::new("stop", Num::float("2.50"))]),
            Suite::new(vec![
                Do::new(Str::new("tick")).into(),
                Stmt::Continue,
            ]),
        )
        .into(),
        While::new("running", Stmt::Break).into(),
        Assign::mutate("x", Num::int("0")).into(),
        Return::empty().into(),
    ])
    .into()
}
