//! Property tests for stack word laws

use plotstack_language::{Context, Features, Stack, Value, Variables};
use plotstack_stdlib::standard_interpreter;
use proptest::prelude::*;

fn literal() -> impl Strategy<Value = Value> {
    "[a-z0-9]{1,6}".prop_map(Value::literal)
}

fn stack(min: usize) -> impl Strategy<Value = Stack> {
    prop::collection::vec(literal(), min..12).prop_map(Stack::from_top)
}

fn run(program: &str, stack: &Stack) -> Stack {
    let interp = standard_interpreter();
    let tokens = plotstack_language::tokenize(program).unwrap();
    let ctx = Context::new(interp.clone(), Variables::new(), Features::Stable).with_stack(stack.clone());
    interp.execute_tokens(&tokens, ctx, true).unwrap().stack().clone()
}

proptest! {
    #[test]
    fn dup_then_drop_is_identity(stack in stack(1)) {
        prop_assert_eq!(run(":dup,:drop", &stack), stack);
    }

    #[test]
    fn swap_twice_is_identity(stack in stack(2)) {
        prop_assert_eq!(run(":swap,:swap", &stack), stack);
    }

    #[test]
    fn rot_then_back_is_identity(stack in stack(1)) {
        prop_assert_eq!(run(":rot,:-rot", &stack), stack);
    }

    #[test]
    fn reverse_twice_is_identity(stack in stack(0)) {
        prop_assert_eq!(run(":reverse,:reverse", &stack), stack);
    }

    #[test]
    fn depth_reports_size(stack in stack(0)) {
        let out = run(":depth", &stack);
        prop_assert_eq!(out.peek().and_then(Value::as_int), i64::try_from(stack.len()).ok());
    }

    #[test]
    fn zero_pick_is_dup(stack in stack(1)) {
        prop_assert_eq!(run("0,:pick", &stack), run(":dup", &stack));
    }

    #[test]
    fn freeze_then_clear_keeps_everything(stack in stack(0)) {
        prop_assert_eq!(run(":freeze,x,:clear", &stack), stack);
    }
}
