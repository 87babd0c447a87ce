pub mod check_view_opts_pars;
pub mod read_track;
pub mod read_view_pars;
pub mod view_opts;
