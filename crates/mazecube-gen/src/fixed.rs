//! Hand-authored flat layouts.

use mazecube_core::Maze;

use crate::text::from_text;

const SMALL: &str = "\
#O#######
#       #
# ## ## #
# #   # #
# # # # #
# # # # #
# # # ###
#       #
#######X#";

const LARGE: &str = "\
#O##################
#                  #
# ## ## ########## #
# #   #          # #
# # # # ######## # #
# # # # #      # # #
# # # # # #### # # #
# # # # # # X# # # #
# # # # # # ## # # #
# # # # # #    # # #
# # # # # ###### # #
# # # # #        # #
# # # # ########## #
# # # #            #";

/// A 9×9 corridor maze for quick experiments.
pub fn small() -> Maze {
    from_text(SMALL).expect("built-in layout is valid")
}

/// A 20-column spiral maze with the goal buried in the middle.
pub fn large() -> Maze {
    from_text(LARGE).expect("built-in layout is valid")
}
