//! Bundled enrollment figures for the twenty schools, 2013 through 2022.
//!
//! Each collection holds 60 values: twenty schools in directory order, three
//! grades (10, 11, 12) per school. Missing figures are `NAN`.

use crate::cube::EnrollmentCube;
use crate::errors::Result;

const NAN: f64 = f64::NAN;

/// Enrollment for 2013
pub const YEAR_2013: [f64; 60] = [
    457.0, 481.0, 425.0,
    NAN, NAN, NAN,
    114.0, 50.0, 23.0,
    346.0, 296.0, 336.0,
    374.0, 361.0, 363.0,
    642.0, 627.0, 629.0,
    623.0, 564.0, 608.0,
    NAN, 498.0, NAN,
    390.0, 343.0, 399.0,
    614.0, 558.0, 528.0,
    458.0, 452.0, 462.0,
    41.0, 83.0, 50.0,
    518.0, 511.0, 529.0,
    366.0, 338.0, 334.0,
    493.0, 465.0, 483.0,
    173.0, 132.0, NAN,
    619.0, 679.0, 600.0,
    604.0, NAN, 590.0,
    538.0, 482.0, 488.0,
    406.0, 471.0, 441.0,
];

/// Enrollment for 2014
pub const YEAR_2014: [f64; 60] = [
    509.0, 485.0, 445.0,
    NAN, NAN, NAN,
    115.0, 104.0, 78.0,
    275.0, 329.0, 338.0,
    402.0, 381.0, 382.0,
    683.0, 613.0, 611.0,
    644.0, 640.0, 620.0,
    540.0, 514.0, 527.0,
    381.0, 390.0, 364.0,
    606.0, 572.0, 560.0,
    472.0, 467.0, 493.0,
    85.0, 107.0, 78.0,
    491.0, 500.0, 508.0,
    342.0, 339.0, 344.0,
    496.0, 487.0, 485.0,
    121.0, 136.0, 150.0,
    712.0, 690.0, 639.0,
    591.0, 592.0, 603.0,
    540.0, 498.0, 471.0,
    458.0, 467.0, 449.0,
];

/// Enrollment for 2015
pub const YEAR_2015: [f64; 60] = [
    463.0, 468.0, 440.0,
    381.0, 374.0, 379.0,
    NAN, 101.0, 53.0,
    323.0, 327.0, 355.0,
    376.0, 374.0, 361.0,
    693.0, 625.0, NAN,
    630.0, 612.0, 578.0,
    576.0, 512.0, 547.0,
    395.0, 403.0, 383.0,
    587.0, 562.0, 571.0,
    470.0, 443.0, 521.0,
    74.0, 104.0, 64.0,
    511.0, 510.0, 525.0,
    336.0, 332.0, 335.0,
    518.0, 496.0, 482.0,
    165.0, 160.0, 215.0,
    652.0, 678.0, 671.0,
    616.0, 601.0, 576.0,
    525.0, 499.0, 486.0,
    417.0, 466.0, 443.0,
];

/// Enrollment for 2016
pub const YEAR_2016: [f64; 60] = [
    494.0, 463.0, 470.0,
    374.0, 372.0, 357.0,
    97.0, NAN, 66.0,
    327.0, 321.0, 344.0,
    414.0, 426.0, 368.0,
    706.0, 620.0, 586.0,
    636.0, 599.0, 613.0,
    574.0, 518.0, 541.0,
    410.0, 383.0, 363.0,
    627.0, 585.0, 554.0,
    483.0, 463.0, 538.0,
    87.0, 101.0, 95.0,
    518.0, 487.0, 532.0,
    371.0, 347.0, 343.0,
    503.0, 501.0, 490.0,
    136.0, 153.0, 198.0,
    694.0, 649.0, 663.0,
    626.0, 590.0, 599.0,
    543.0, 498.0, 500.0,
    453.0, 469.0, NAN,
];

/// Enrollment for 2017
pub const YEAR_2017: [f64; 60] = [
    459.0, 454.0, 443.0,
    404.0, 381.0, 351.0,
    110.0, 101.0, 46.0,
    332.0, 364.0, 371.0,
    427.0, 421.0, 371.0,
    679.0, 652.0, 585.0,
    663.0, NAN, 616.0,
    562.0, 552.0, 511.0,
    433.0, 408.0, 392.0,
    605.0, 577.0, 570.0,
    457.0, 451.0, 495.0,
    104.0, 113.0, NAN,
    525.0, 521.0, 531.0,
    354.0, 363.0, 334.0,
    498.0, 512.0, 488.0,
    157.0, 183.0, 199.0,
    693.0, 649.0, 645.0,
    610.0, 594.0, 625.0,
    557.0, 495.0, 479.0,
    446.0, 448.0, 451.0,
];

/// Enrollment for 2018
pub const YEAR_2018: [f64; 60] = [
    475.0, 499.0, 468.0,
    372.0, 368.0, 348.0,
    96.0, 84.0, 62.0,
    342.0, 329.0, 340.0,
    404.0, 386.0, 410.0,
    715.0, 617.0, 610.0,
    664.0, 616.0, 600.0,
    564.0, 540.0, 515.0,
    426.0, 392.0, 398.0,
    623.0, 580.0, 566.0,
    493.0, 481.0, 536.0,
    125.0, 111.0, 119.0,
    522.0, 517.0, 537.0,
    366.0, 329.0, 352.0,
    503.0, 494.0, 513.0,
    162.0, 197.0, 197.0,
    661.0, 665.0, 652.0,
    602.0, 627.0, 587.0,
    521.0, 553.0, 505.0,
    414.0, 433.0, 496.0,
];

/// Enrollment for 2019
pub const YEAR_2019: [f64; 60] = [
    513.0, 491.0, 478.0,
    402.0, 405.0, 366.0,
    142.0, 106.0, 93.0,
    322.0, 319.0, 356.0,
    422.0, 429.0, 395.0,
    692.0, 665.0, 590.0,
    668.0, 631.0, 614.0,
    567.0, 523.0, 519.0,
    426.0, NAN, 409.0,
    597.0, 593.0, 572.0,
    480.0, 476.0, 514.0,
    101.0, 117.0, 134.0,
    514.0, 508.0, NAN,
    377.0, 326.0, 308.0,
    522.0, NAN, 464.0,
    148.0, 149.0, 206.0,
    706.0, 703.0, 671.0,
    642.0, 584.0, 642.0,
    538.0, 517.0, 502.0,
    445.0, 498.0, 495.0,
];

/// Enrollment for 2020
pub const YEAR_2020: [f64; 60] = [
    514.0, 463.0, 516.0,
    375.0, 390.0, 349.0,
    NAN, 98.0, 118.0,
    386.0, 375.0, 381.0,
    449.0, 418.0, 369.0,
    708.0, 634.0, 664.0,
    691.0, NAN, 612.0,
    596.0, 538.0, 520.0,
    434.0, 393.0, 406.0,
    599.0, 581.0, 566.0,
    516.0, 491.0, 545.0,
    83.0, 101.0, NAN,
    528.0, 506.0, 543.0,
    391.0, 364.0, 338.0,
    495.0, 480.0, 463.0,
    128.0, 203.0, 198.0,
    704.0, 663.0, 648.0,
    672.0, 635.0, 633.0,
    555.0, 568.0, 556.0,
    476.0, 488.0, 476.0,
];

/// Enrollment for 2021
pub const YEAR_2021: [f64; 60] = [
    493.0, 490.0, 476.0,
    452.0, 406.0, 420.0,
    148.0, 104.0, 68.0,
    385.0, 327.0, NAN,
    406.0, 404.0, 398.0,
    726.0, 696.0, 625.0,
    686.0, 650.0, 632.0,
    552.0, 535.0, 510.0,
    378.0, 440.0, 391.0,
    612.0, 597.0, 548.0,
    517.0, 472.0, 519.0,
    79.0, 140.0, 104.0,
    545.0, 486.0, 567.0,
    353.0, 333.0, 307.0,
    522.0, 514.0, 512.0,
    160.0, 181.0, 228.0,
    717.0, 667.0, 667.0,
    616.0, 616.0, 645.0,
    578.0, 530.0, 545.0,
    478.0, 470.0, 503.0,
];

/// Enrollment for 2022
pub const YEAR_2022: [f64; 60] = [
    549.0, 522.0, 433.0,
    385.0, 383.0, 437.0,
    143.0, 131.0, 76.0,
    292.0, 417.0, 372.0,
    402.0, 447.0, 396.0,
    738.0, 651.0, 628.0,
    631.0, 635.0, 637.0,
    551.0, 532.0, 483.0,
    381.0, 414.0, NAN,
    573.0, 628.0, 586.0,
    522.0, 519.0, 546.0,
    141.0, 88.0, 133.0,
    531.0, 492.0, 557.0,
    405.0, 366.0, 323.0,
    562.0, 528.0, 533.0,
    189.0, 239.0, 243.0,
    677.0, 681.0, 639.0,
    631.0, 611.0, 606.0,
    574.0, 543.0, 510.0,
    405.0, 509.0, 479.0,
];

/// All ten yearly collections in chronological order.
pub const ALL_YEARS: [&[f64]; 10] = [
    &YEAR_2013, &YEAR_2014, &YEAR_2015, &YEAR_2016, &YEAR_2017, &YEAR_2018, &YEAR_2019,
    &YEAR_2020, &YEAR_2021, &YEAR_2022,
];

/// Builds the enrollment cube from the bundled figures.
///
/// # Errors
///
/// Returns [`EnrollmentError::ShapeError`](crate::errors::EnrollmentError::ShapeError)
/// if a bundled collection does not hold exactly 60 values.
pub fn load_cube() -> Result<EnrollmentCube> {
    EnrollmentCube::from_years(&ALL_YEARS)
}
