/*
 * VegaPlot
 * Copyright (C) 2022 VegaFusion Technologies LLC
 *
 * This program is distributed under multiple licenses.
 * Please consult the license documentation provided alongside
 * this program the details of the active license.
 */
#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod spec;
pub mod validate;

pub use vegaplot_common::error;
