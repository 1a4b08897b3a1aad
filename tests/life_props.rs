use lifeboard::button::Button;
use lifeboard::button::Face;
use lifeboard::button::LatchKind;
use lifeboard::layout::Rect;
use lifeboard::render::Color;
use lifeboard::world::World;
use proptest::prelude::*;

/// Textbook Life: read one buffer, write a fresh one.
fn reference_next(cells: &[bool], w: usize, h: usize) -> Vec<bool> {
    let mut next = vec![false; w * h];

    for y in 0..h {
        for x in 0..w {
            let mut n = 0;

            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                    let on_grid = (0..w as i64).contains(&nx) && (0..h as i64).contains(&ny);

                    if (dx, dy) != (0, 0) && on_grid && cells[ny as usize * w + nx as usize] {
                        n += 1;
                    }
                }
            }

            let alive = cells[y * w + x];
            next[y * w + x] = matches!((alive, n), (true, 2) | (true, 3) | (false, 3));
        }
    }

    next
}

fn world_from(cells: &[bool], w: usize, h: usize) -> World {
    let mut world = World::new(w, h);

    for (i, _) in cells.iter().enumerate().filter(|(_, alive)| **alive) {
        world.grid_mut().toggle(i % w, i / w);
    }

    world
}

fn snapshot(world: &World) -> Vec<bool> {
    world.grid().cells().map(|c| c.is_alive()).collect()
}

fn grid() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            proptest::collection::vec(any::<bool>(), w * h),
        )
    })
}

fn button(kind: LatchKind) -> Button {
    Button::new(
        Rect::new(0, 0, 10, 10),
        kind,
        Face::new("up", Color::Green),
        Face::new("down", Color::Red),
    )
}

proptest! {
    #[test]
    fn in_place_matches_two_buffers((w, h, cells) in grid(), generations in 1usize..4) {
        let mut world = world_from(&cells, w, h);
        let mut expected = cells;

        for _ in 0..generations {
            world.next();
            expected = reference_next(&expected, w, h);

            prop_assert_eq!(snapshot(&world), expected.clone());
            prop_assert!(world.grid().cells().all(|c| c.state() <= 1));
        }
    }

    #[test]
    fn toggle_latch_is_click_parity(clicks in proptest::collection::vec(any::<bool>(), 0..100)) {
        let mut b = button(LatchKind::Toggle);

        for &click in &clicks {
            b.update(click);
        }

        let n = clicks.iter().filter(|&&c| c).count();
        prop_assert_eq!(b.pressed(), n % 2 == 1);
        prop_assert_eq!(b.show_pressed(), b.pressed());
    }

    #[test]
    fn flash_never_fires_during_a_flash(
        clicks in proptest::collection::vec(any::<bool>(), 0..300)
    ) {
        let mut b = button(LatchKind::flash());
        let mut last_fired: Option<usize> = None;

        for (frame, &click) in clicks.iter().enumerate() {
            b.update(click);

            if b.pressed() {
                prop_assert!(click);

                if let Some(last) = last_fired {
                    prop_assert!(frame - last >= 33, "fired at {} and {}", last, frame);
                }

                last_fired = Some(frame);
            }
        }
    }
}
