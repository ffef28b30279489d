/*
 * VegaPlot
 * Copyright (C) 2022 VegaFusion Technologies LLC
 *
 * This program is distributed under multiple licenses.
 * Please consult the license documentation provided alongside
 * this program the details of the active license.
 */
pub mod chart;
pub mod data;
pub mod scale;
pub mod transform;
pub mod values;
pub mod visitors;
