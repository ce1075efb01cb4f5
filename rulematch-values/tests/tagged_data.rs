use pretty_assertions::assert_eq;
use rulematch::{guard, match_on, variable, wildcard, MatchError, MatchResult, Rule};
use rulematch_values::{lit, tuple, DataType, Value, ValueError};

fn shape_type() -> DataType {
    DataType::new("Shape")
        .variant("Circle", 1)
        .variant("Rect", 2)
        .variant("Empty", 0)
}

fn shape(tag: &str, fields: Vec<i64>) -> Result<Value, ValueError> {
    shape_type()
        .constructor(tag)?
        .construct(fields.into_iter().map(Value::integer).collect())
}

fn area_rule(shapes: &DataType) -> Result<Rule<Value, i64>, ValueError> {
    let circle = shapes.constructor("Circle")?;
    let rect = shapes.constructor("Rect")?;
    let empty = shapes.constructor("Empty")?;

    let int = |m: &MatchResult<Value>, name: &str| -> Result<i64, MatchError> {
        m.get(name)?
            .as_integer()
            .ok_or_else(|| MatchError::action(format!("{} is not an integer", name)))
    };

    Ok(empty
        .pattern(vec![])
        .then(|_| Ok(0))
        .or_else(
            rect.pattern(vec![variable("side"), variable("side")])
                .then(move |m| Ok(int(m, "side")? * int(m, "side")?)),
        )
        .or_else(
            rect.pattern(vec![variable("w"), variable("h")])
                .then(move |m| Ok(int(m, "w")? * int(m, "h")?)),
        )
        .or_else(
            circle
                .pattern(vec![variable("r")])
                .then(move |m| Ok(3 * int(m, "r")? * int(m, "r")?)),
        ))
}

#[test]
fn test_area_of_each_variant() {
    let rule = area_rule(&shape_type()).unwrap();

    assert_eq!(match_on(shape("Empty", vec![]).unwrap()).against(&rule), Ok(0));
    assert_eq!(match_on(shape("Rect", vec![2, 5]).unwrap()).against(&rule), Ok(10));
    assert_eq!(match_on(shape("Rect", vec![4, 4]).unwrap()).against(&rule), Ok(16));
    assert_eq!(match_on(shape("Circle", vec![2]).unwrap()).against(&rule), Ok(12));
}

#[test]
fn test_non_shape_subject_exhausts_rule() {
    let rule = area_rule(&shape_type()).unwrap();

    assert_eq!(
        match_on(Value::atom("square")).against(&rule),
        Err(MatchError::NoMatch { alternatives: 4 })
    );
}

#[test]
fn test_construct_rejects_wrong_field_count() {
    assert_eq!(
        shape("Circle", vec![1, 2]),
        Err(ValueError::wrong_field_count("Circle", 1, 2))
    );
    assert_eq!(
        shape("Triangle", vec![]),
        Err(ValueError::unknown_variant("Shape", "Triangle"))
    );
}

#[test]
fn test_nested_data_and_tuples() {
    let option = DataType::new("Option").variant("None", 0).variant("Some", 1);
    let some = option.constructor("Some").unwrap();
    let none = option.constructor("None").unwrap();

    let rule: Rule<Value, String> = some
        .pattern(vec![tuple(vec![lit("ok"), variable("value")])])
        .then(|m| Ok(format!("ok: {}", m["value"])))
        .or_else(
            some.pattern(vec![tuple(vec![lit("error"), wildcard()])])
                .then(|_| Ok("error".to_string())),
        )
        .or_else(none.pattern(vec![]).then(|_| Ok("nothing".to_string())));

    let ok = some
        .construct(vec![Value::tuple(vec![Value::string("ok"), Value::integer(7)])])
        .unwrap();
    let error = some
        .construct(vec![Value::tuple(vec![Value::string("error"), Value::unit()])])
        .unwrap();
    let nothing = none.construct(vec![]).unwrap();

    assert_eq!(match_on(ok).against(&rule).unwrap(), "ok: 7");
    assert_eq!(match_on(error).against(&rule).unwrap(), "error");
    assert_eq!(match_on(nothing).against(&rule).unwrap(), "nothing");
}

#[test]
fn test_tuple_guard_on_bound_values() {
    let rule: Rule<Value, &str> = tuple(vec![variable("a"), variable("b")])
        .when(
            guard(|m: &MatchResult<Value>| Ok(m.get("a")?.as_integer() < m.get("b")?.as_integer()))
                .then(|_| Ok("ascending")),
        )
        .or_else(tuple(vec![variable("a"), variable("a")]).then(|_| Ok("equal")))
        .or_else(tuple(vec![wildcard(), wildcard()]).then(|_| Ok("descending")));

    let pair = |a: i64, b: i64| Value::tuple(vec![Value::integer(a), Value::integer(b)]);

    assert_eq!(match_on(pair(1, 2)).against(&rule).unwrap(), "ascending");
    assert_eq!(match_on(pair(2, 2)).against(&rule).unwrap(), "equal");
    assert_eq!(match_on(pair(3, 2)).against(&rule).unwrap(), "descending");
    assert!(match_on(Value::tuple(vec![])).against(&rule).unwrap_err().is_no_match());
}
