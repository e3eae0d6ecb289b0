use std::cell::Cell;

use optio_core::prelude::*;

fn options() -> Vec<ValueOption<i32>> {
  vec![some(-3), some(0), some(7), none()]
}

#[test]
fn map_identity() {
  for option in options() {
    assert_eq!(option.map(|v| v), option);
  }
}

#[test]
fn map_composition() {
  let f = |v: i32| v * 2;
  let g = |v: i32| v - 1;
  for option in options() {
    assert_eq!(option.map(f).map(g), option.map(|v| g(f(v))));
  }
}

#[test]
fn absence_is_never_mapped() {
  let calls = Cell::new(0);
  let probe = |v: i32| {
    calls.set(calls.get() + 1);
    v
  };
  let _ = none::<i32>().map(probe).map(probe).bind(|v| some(probe(v)));
  let _ = none_with_error::<i32, &str>("e").map(probe).bind(|v| Ok::<_, &str>(probe(v)));
  assert_eq!(calls.get(), 0);
}

#[test]
fn bind_laws() {
  let f = |v: i32| if v > 0 { some(v * 10) } else { none() };
  for x in [-1, 0, 1, 2] {
    assert_eq!(some(x).bind(f), f(x));
  }
  assert_eq!(none().bind(f), none());
  for option in options() {
    assert_eq!(option.bind(some), option);
  }
}

#[test]
fn must_scenarios() {
  let is_even = |v: &i32| v % 2 == 0;
  assert_eq!(some(4).must(is_even), some(4));
  assert_eq!(some(3).must(is_even), none());
  assert_eq!(some_with_error::<i32, &str>(3).must(is_even, |_| "odd"), none_with_error("odd"));
  let mapper_calls = Cell::new(0);
  let result = none_with_error::<i32, &str>("x").must(is_even, |_| {
    mapper_calls.set(mapper_calls.get() + 1);
    "odd"
  });
  assert_eq!(result, none_with_error("x"));
  assert_eq!(mapper_calls.get(), 0);
}

#[test]
fn or_scenarios() {
  assert_eq!(some(1).or(some(2)), some(1));
  assert_eq!(none().or(some(2)), some(2));
  let fallback_calls = Cell::new(0);
  let result = some(1).or_else(|| {
    fallback_calls.set(fallback_calls.get() + 1);
    some(2)
  });
  assert_eq!(result, some(1));
  assert_eq!(fallback_calls.get(), 0);
}

#[test]
fn unwrap_scenarios() {
  assert_eq!(some(5).unwrap(), 5);
  let outcome = std::panic::catch_unwind(|| none::<i32>().unwrap());
  assert!(outcome.is_err());
}

#[test]
fn zip_scenarios() {
  assert_eq!(some(1).zip(some("a")), some((1, "a")));
  assert_eq!(none::<i32>().zip(some("a")), none());
}

#[test]
fn element_access_scenarios() {
  let empty: [i32; 0] = [];
  assert_eq!(empty.first_or_none(), none());
  assert_eq!(empty.iter().first_or_none(), none());
  assert_eq!([10, 20, 30].element_at_or_none(1), some(&20));
  assert_eq!([10, 20, 30].element_at_or_none(-1), none());
  assert_eq!([10, 20, 30].element_at_or_none(3), none());
  assert_eq!([10, 20, 30].into_iter().element_at_or_none(1), some(20));
}

#[test]
fn round_trips() {
  assert_eq!(some_with_error::<i32, &str>(5).drop_error(), some(5));
  assert_eq!(none::<i32>().or_with_error("err"), none_with_error("err"));
  assert_eq!(some(5).or_with_error("err").drop_error(), some(5));
}

#[test]
fn structural_equality() {
  assert_eq!(some(5), some(2 + 3));
  assert_eq!(none_with_error::<i32, &str>("a"), none_with_error("a"));
  assert_ne!(none_with_error::<i32, &str>("a"), none_with_error("b"));
  assert_ne!(some_with_error::<i32, i32>(1), none_with_error(1));
}

#[test]
fn railway_chain() {
  let parse_port = |input: &str| {
    some(input)
      .map(str::trim)
      .must(|s| !s.is_empty())
      .or_with_error("empty input".to_string())
      .bind(|s| s.parse::<u16>().map_err(|e| e.to_string()))
      .must(|port| *port >= 1024, |port| format!("port {port} is privileged"))
  };
  assert_eq!(parse_port(" 8080 "), some_with_error(8080));
  assert_eq!(parse_port("  "), none_with_error("empty input".to_string()));
  assert_eq!(parse_port("80"), none_with_error("port 80 is privileged".to_string()));
  assert!(parse_port("http").error().is_some());
}

#[test]
fn polymorphic_view() {
  fn describe(option: &dyn Optional<Value=i32>) -> String {
    match option.value() {
      Some(value) => format!("value {value}"),
      None => "nothing".to_string(),
    }
  }
  assert_eq!(describe(&some(1)), "value 1");
  assert_eq!(describe(&None::<i32>), "nothing");
}
