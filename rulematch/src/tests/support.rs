use crate::{constructor, Pattern};
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Minimal tagged data type used as a match subject
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Int(i64),
    Nil,
    Cons(Box<Term>, Box<Term>),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Int(n) => write!(f, "{}", n),
            Term::Nil => write!(f, "Nil()"),
            Term::Cons(head, tail) => write!(f, "Cons({}, {})", head, tail),
        }
    }
}

pub fn int(n: i64) -> Term {
    Term::Int(n)
}

pub fn cons_term(head: Term, tail: Term) -> Term {
    Term::Cons(Box::new(head), Box::new(tail))
}

/// Build `Cons(a, Cons(b, ... Nil()))` from integers
pub fn list(items: &[i64]) -> Term {
    items
        .iter()
        .rev()
        .fold(Term::Nil, |tail, n| cons_term(int(*n), tail))
}

pub fn cons(head: Pattern<Term>, tail: Pattern<Term>) -> Pattern<Term> {
    constructor("cons", vec![head, tail], |term: &Term| match term {
        Term::Cons(head, tail) => Some(vec![(**head).clone(), (**tail).clone()]),
        _ => None,
    })
}

pub fn nil() -> Pattern<Term> {
    constructor("nil", vec![], |term: &Term| {
        matches!(term, Term::Nil).then(Vec::new)
    })
}

/// Install a test subscriber honouring `RUST_LOG`; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
