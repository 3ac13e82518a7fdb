/// Geometry of an endlessly scrolling strip of repeated items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarqueeTrack {
    pub width_px: usize,
    /// Distance travelled before the animation loops.
    pub loop_offset_px: usize,
}

pub fn repeat_items<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let mut repeated = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        repeated.extend_from_slice(items);
    }
    repeated
}

pub fn track(item_count: usize, copies: usize, slot_px: usize, step_px: usize) -> MarqueeTrack {
    MarqueeTrack {
        width_px: slot_px * item_count * copies,
        loop_offset_px: step_px * item_count,
    }
}

/// Keyframes + class for a linear, infinite horizontal scroll.
pub fn marquee_css(class: &str, track: MarqueeTrack, duration_s: u32) -> String {
    format!(
        ".{class} {{ width: {width}px; animation: {class}-scroll {duration}s linear infinite; }}\n\
         @keyframes {class}-scroll {{ from {{ transform: translateX(0); }} to {{ transform: translateX(-{offset}px); }} }}",
        class = class,
        width = track.width_px,
        duration = duration_s,
        offset = track.loop_offset_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_in_order() {
        assert_eq!(repeat_items(&["a", "b"], 3), vec!["a", "b", "a", "b", "a", "b"]);
        assert!(repeat_items::<&str>(&[], 3).is_empty());
    }

    #[test]
    fn hero_and_tech_tracks() {
        assert_eq!(
            track(7, 3, 200, 200),
            MarqueeTrack { width_px: 4200, loop_offset_px: 1400 }
        );
        assert_eq!(
            track(11, 3, 120, 100),
            MarqueeTrack { width_px: 3960, loop_offset_px: 1100 }
        );
    }

    #[test]
    fn css_mentions_offset() {
        let css = marquee_css("tech-track", track(2, 3, 120, 100), 30);
        assert!(css.contains("width: 720px"));
        assert!(css.contains("translateX(-200px)"));
        assert!(css.contains("30s linear infinite"));
    }
}
