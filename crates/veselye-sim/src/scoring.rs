//! Point values and end-of-session grading.

use veselye_core::constants::{
    BONUS_BOTTLE_POINTS, BOTTLE_POINTS, GRADE_COMPETENT_MIN, GRADE_LEGENDARY_MIN,
};
use veselye_core::enums::Grade;

/// Points credited for catching a bottle.
pub fn points_for(is_bonus: bool) -> u32 {
    if is_bonus {
        BONUS_BOTTLE_POINTS
    } else {
        BOTTLE_POINTS
    }
}

/// Map a final score to its tier. Lower bounds are inclusive.
pub fn grade(score: u32) -> Grade {
    if score >= GRADE_LEGENDARY_MIN {
        Grade::Legendary
    } else if score >= GRADE_COMPETENT_MIN {
        Grade::Competent
    } else {
        Grade::Novice
    }
}
