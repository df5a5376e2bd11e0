use lf_core::BinaryView;

/// Magnitude of the turn taken when the measured line cannot be trusted.
pub const ESCAPE_ANGLE_DEG: i32 = 45;

pub fn count_line_pixels(img: &BinaryView<'_>) -> usize {
    (0..img.height())
        .map(|y| img.count_line_in_row(y, 0, img.width()))
        .sum()
}

/// Line pixel counts `(left, right)`. Column `width / 2` belongs to the left
/// half.
pub fn half_counts(img: &BinaryView<'_>) -> (usize, usize) {
    let split = (img.width() / 2 + 1).min(img.width());
    (0..img.height()).fold((0, 0), |(left, right), y| {
        (
            left + img.count_line_in_row(y, 0, split),
            right + img.count_line_in_row(y, split, img.width()),
        )
    })
}

/// Coverage check against an already computed line pixel count.
pub fn enough_line(
    line_pixels: usize,
    width: usize,
    height: usize,
    percent_of_white_needed: f64,
) -> bool {
    let needed = height as f64 * width as f64 * percent_of_white_needed;
    line_pixels as f64 >= needed
}

/// `true` when at least `percent_of_white_needed` of the frame is line.
pub fn has_enough_line(img: &BinaryView<'_>, percent_of_white_needed: f64) -> bool {
    enough_line(
        count_line_pixels(img),
        img.width(),
        img.height(),
        percent_of_white_needed,
    )
}

/// Fixed escape heading: `+45` when the right half holds more line pixels,
/// `-45` otherwise (ties included).
///
/// The sign is intentional. Through [`crate::velocity_command`] a positive
/// heading turns clockwise, so the vehicle turns toward the heavier half.
pub fn escape_angle(img: &BinaryView<'_>) -> i32 {
    let (left, right) = half_counts(img);
    if right > left {
        ESCAPE_ANGLE_DEG
    } else {
        -ESCAPE_ANGLE_DEG
    }
}

#[cfg(test)]
mod tests {
    use lf_core::BinaryImage;

    use super::{count_line_pixels, escape_angle, half_counts, has_enough_line};
    use crate::{DecisionConfig, Heading, velocity_command};

    fn with_block(w: usize, h: usize, x0: usize, x1: usize, rows: usize) -> BinaryImage {
        let mut img = BinaryImage::new_fill(w, h, 0);
        for y in 0..rows {
            img.fill_row_span(y, x0, x1, 1);
        }
        img
    }

    #[test]
    fn counts_and_halves() {
        // width 10: columns 0..=5 are left, 6..=9 right.
        let img = with_block(10, 4, 4, 8, 4);
        let view = img.as_view();
        assert_eq!(count_line_pixels(&view), 16);
        assert_eq!(half_counts(&view), (8, 8));
    }

    #[test]
    fn coverage_threshold_is_inclusive() {
        // 100 x 10 frame, 5% = 50 pixels.
        let img = with_block(100, 10, 0, 50, 1);
        assert!(has_enough_line(&img.as_view(), 0.05));
        let img = with_block(100, 10, 0, 49, 1);
        assert!(!has_enough_line(&img.as_view(), 0.05));
    }

    #[test]
    fn blank_frame_fails_any_positive_coverage() {
        let img = BinaryImage::new_fill(32, 32, 0);
        assert!(!has_enough_line(&img.as_view(), 0.01));
        assert!(has_enough_line(&img.as_view(), 0.0));
    }

    #[test]
    fn escape_turns_toward_heavier_half() {
        let right_heavy = with_block(40, 10, 30, 40, 10);
        assert_eq!(escape_angle(&right_heavy.as_view()), 45);

        let left_heavy = with_block(40, 10, 0, 10, 10);
        assert_eq!(escape_angle(&left_heavy.as_view()), -45);

        let blank = BinaryImage::new_fill(40, 10, 0);
        assert_eq!(escape_angle(&blank.as_view()), -45);

        let empty = BinaryImage::from_vec(0, 0, Vec::new()).expect("empty");
        assert_eq!(escape_angle(&empty.as_view()), -45);
    }

    #[test]
    fn right_heavy_escape_commands_clockwise_turn() {
        let right_heavy = with_block(40, 10, 30, 40, 10);
        let heading = Heading::Degrees(escape_angle(&right_heavy.as_view()));
        let cmd = velocity_command(heading, &DecisionConfig::default());
        assert!(cmd.angular < 0.0);
    }
}
