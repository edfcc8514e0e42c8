//! End-to-end filter compilation

use ql_planner::{ErrorKind, Literal, compile};

fn check(raw: &str, query: &str, args: Vec<Literal>) {
    let filter = compile(raw, None).unwrap_or_else(|err| panic!("{raw}: {err}"));

    assert_eq!(filter.query, query, "query for {raw}");
    assert_eq!(filter.args, args, "args for {raw}");
    assert_eq!(filter.placeholder_count(), filter.args.len());
}

#[test]
fn test_documented_examples() {
    check("name:eq('abc')", "`name` = ?", vec!["abc".into()]);
    check(
        "name:in('aaa','bbb','ccc')",
        "`name` in (?,?,?)",
        vec!["aaa".into(), "bbb".into(), "ccc".into()],
    );
    check(
        "name:range(0,1000)",
        "`name` between ? and ?",
        vec![Literal::Integer(0), Literal::Integer(1000)],
    );
    check(
        "name:json('$[*].charger','0001')",
        "json_contains(`name`->'$[*].charger',?,'$')",
        vec!["0001".into()],
    );
    check(
        "name:json_extract('$.recover_status','in',1,2,3)",
        "json_extract(`name`,'$.recover_status') in (?,?,?)",
        vec![Literal::Integer(1), Literal::Integer(2), Literal::Integer(3)],
    );
    check(
        "name:json_path('$.recover_status',0)",
        "json_contains_path(`name`,'all','$.recover_status') = ?",
        vec![Literal::Integer(0)],
    );
    check(
        "name:json_in('$.recover_status',1,2)",
        "json_contains(`name`->'$.recover_status',json_array(?,?))",
        vec![Literal::Integer(1), Literal::Integer(2)],
    );
}

#[test]
fn test_question_mark_in_json_path() {
    check(
        "doc:json_path('$.x?',1)",
        "json_contains_path(`doc`,'all','$.x?') = ?",
        vec![Literal::Integer(1)],
    );
}

#[test]
fn test_joint_clauses_keep_source_order() {
    check(
        "id:eq('aaaa'),name:like('%%foc'),age:range(16,32)",
        "`id` = ? and `name` like ? and `age` between ? and ?",
        vec!["aaaa".into(), "%%foc".into(), Literal::Integer(16), Literal::Integer(32)],
    );
}

#[test]
fn test_base_comparisons() {
    for (op, sym) in [
        ("eq", "="),
        ("neq", "<>"),
        ("gt", ">"),
        ("ge", ">="),
        ("lt", "<"),
        ("le", "<="),
        ("like", "like"),
    ] {
        check(
            &format!("k:{op}('v')"),
            &format!("`k` {sym} ?"),
            vec!["v".into()],
        );
    }
}

#[test]
fn test_numeric_coercion() {
    check("a:eq(1.5)", "`a` = ?", vec![Literal::Float(1.5)]);
    check("a:eq(15)", "`a` = ?", vec![Literal::Integer(15)]);
    check("a:eq('15')", "`a` = ?", vec![Literal::from("15")]);
    check("a:eq(abc)", "`a` = ?", vec![Literal::from("abc")]);
}

#[test]
fn test_composite_key() {
    check(
        "first+last:like('%bo%')",
        "concat(`first`,`last`) like ?",
        vec!["%bo%".into()],
    );
}

#[test]
fn test_junk_between_clauses_is_ignored() {
    check(
        "?? a:eq(1) not-a-clause b:gt(2)",
        "`a` = ? and `b` > ?",
        vec![Literal::Integer(1), Literal::Integer(2)],
    );
    check("nothing here", "", vec![]);
}

#[test]
fn test_arity_errors() {
    for raw in [
        "a:range(1)",
        "a:range(1,2,3)",
        "a:json('$.x')",
        "a:json('$.x',1,2)",
        "a:json_path('$.x')",
        "a:json_path('$.x',1,2)",
        "a:json_in('$.x')",
        "a:json_extract('$.x','eq')",
    ] {
        let err = compile(raw, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArityMismatch, "{raw}");
    }
}

#[test]
fn test_error_kinds() {
    let cases = [
        ("a:eq()", ErrorKind::MissingValue),
        ("a:in(1,,2)", ErrorKind::MissingValue),
        ("a:eq('abc)", ErrorKind::UnterminatedString),
        ("a:eq(12x)", ErrorKind::InvalidNumber),
        ("a:eq(1.0e999)", ErrorKind::InvalidNumber),
        ("a:json('$.x',1.0e999)", ErrorKind::InvalidNumber),
        ("a:between(1,2)", ErrorKind::UnknownOperator),
        ("a:json(1,2)", ErrorKind::TypeMismatch),
        ("a:json_in(1,2)", ErrorKind::TypeMismatch),
        ("a:json_path(1,2)", ErrorKind::TypeMismatch),
        ("a:json_extract(1,'eq',2)", ErrorKind::TypeMismatch),
    ];

    for (raw, kind) in cases {
        let err = compile(raw, None).unwrap_err();
        assert_eq!(err.kind(), kind, "{raw}");
        assert_eq!(err.clause(), Some(raw));
    }
}

#[test]
fn test_first_failure_aborts() {
    let err = compile("a:eq(1),b:zz(2),c:range(1)", None).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnknownOperator);
    assert_eq!(err.clause(), Some("b:zz(2),"));
    assert!(err.to_string().starts_with("b:zz(2),"));
}

#[test]
fn test_compile_is_idempotent() {
    let raw = "id:eq('aaaa'),tags:in(1,2.5,'x'),doc:json_extract('$.a','like','%z%')";

    let first = compile(raw, None).unwrap();
    let second = compile(raw, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_output_serializes() {
    let filter = compile("name:eq('abc'),age:range(16,32)", None).unwrap();
    let json = serde_json::to_value(&filter).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "query": "`name` = ? and `age` between ? and ?",
            "args": ["abc", 16, 32]
        })
    );
}

#[test]
fn test_compile_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                compile(&format!("n:eq({i}),m:in('a','b')"), None).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let filter = handle.join().unwrap();
        assert_eq!(filter.query, "`n` = ? and `m` in (?,?)");
        assert_eq!(filter.args[0], Literal::Integer(i as i64));
    }
}
