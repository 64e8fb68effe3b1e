// Copyright 2025 the Darkroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-module interaction scenarios.

use darkroom_event_state::Key;
use darkroom_event_state::lightbox::{Lightbox, LightboxEvent};
use darkroom_event_state::scroll_lock::Overflow;
use darkroom_event_state::stack::{CardStack, StackState};

#[test]
fn next_wraps_for_three_and_five() {
    for len in [3_usize, 5] {
        let mut body = Overflow::Unset;
        let mut lb = Lightbox::new(len);
        lb.open(len - 1, &mut body);
        assert_eq!(lb.next(), Some(LightboxEvent::Moved { from: len - 1, to: 0 }));
        assert_eq!(lb.prev(), Some(LightboxEvent::Moved { from: 0, to: len - 1 }));
    }
}

#[test]
fn full_cycle_returns_to_start() {
    let mut body = Overflow::Unset;
    let mut lb = Lightbox::new(5);
    lb.open(2, &mut body);
    for _ in 0..5 {
        lb.next();
    }
    assert_eq!(lb.current(), Some(2));
    for _ in 0..5 {
        lb.prev();
    }
    assert_eq!(lb.current(), Some(2));
}

#[test]
fn open_from_stack_then_arrow_and_escape() {
    let mut body = Overflow::Auto;
    let mut stack = CardStack::new();
    let mut lb = Lightbox::new(3);

    assert_eq!(stack.click_card(1), None);
    let index = stack.click_card(1).expect("expanded stack opens the card");
    lb.open(index, &mut body);
    assert_eq!(body, Overflow::Hidden);

    lb.handle_key(Key::ArrowRight, &mut body);
    assert_eq!(lb.current(), Some(2));
    lb.handle_key(Key::ArrowRight, &mut body);
    assert_eq!(lb.current(), Some(0));

    assert_eq!(lb.handle_key(Key::Escape, &mut body), Some(LightboxEvent::Closed));
    assert_eq!(body, Overflow::Auto);
    assert_eq!(stack.state(), StackState::Expanded);
}

#[test]
fn double_toggle_restores_stack() {
    let mut stack = CardStack::new();
    let before = stack.state();
    stack.toggle();
    stack.toggle();
    assert_eq!(stack.state(), before);
}
