use crate::interfaces::surface::RgbColor;
use crate::pre::read_view_pars::ViewPars;
use crate::pre::view_opts::ViewOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_view_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_view_opts_pars(view_opts: &ViewOpts, view_pars: &ViewPars) -> anyhow::Result<()> {
    // PART 1: VIEW OPTIONS
    if !(0.0 <= view_opts.padding && view_opts.padding <= 1000.0) {
        return Err(InputValueError).context(format!(
            "padding is {:.1}, which is not within the reasonable range of [0.0, 1000.0]!",
            view_opts.padding
        ));
    }

    // PART 2: VIEW PARAMETERS
    // TRACK ---------------------------------------------------------------------------------------
    if view_pars.track_pars.name.is_empty() {
        return Err(InputValueError).context("The track name must not be empty!");
    }

    // RACECARS ------------------------------------------------------------------------------------
    for (i, racecar_pars) in view_pars.racecar_pars_all.iter().enumerate() {
        if racecar_pars.id.is_empty() {
            return Err(InputValueError)
                .context(format!("The id of the {}. racecar is empty!", i + 1));
        }

        RgbColor::from_css(&racecar_pars.color)
            .context(format!("The color of racecar {} is invalid!", racecar_pars.id))?;
    }

    Ok(())
}
