//! Static geometry of the four-zone ring sign.
//!
//! The display is one WS2812 chain split into four contiguous color zones,
//! each made of inner/middle/outer rings. Everything here is read-only
//! lookup data: zone offsets, the per-zone race step tables (one row per
//! cursor position, one index per ring), the wave phase spans and the
//! switch permutation table. No logic beyond indexing lives here.

/// Number of LEDs per zone, in chain order.
pub const VIOLET_LEDS: u8 = 170;
pub const BEIGE_LEDS: u8 = 83;
pub const YELLOW_LEDS: u8 = 116;
pub const CYAN_LEDS: u8 = 170;

/// Total chain length. One trailing pixel past the cyan zone is clocked
/// out with every frame, so the buffer is one longer than the zone sum.
pub const LED_COUNT: usize =
    VIOLET_LEDS as usize + BEIGE_LEDS as usize + YELLOW_LEDS as usize + CYAN_LEDS as usize + 1;

pub const VIOLET_START: usize = 0;
pub const BEIGE_START: usize = VIOLET_LEDS as usize;
pub const YELLOW_START: usize = BEIGE_START + BEIGE_LEDS as usize;
pub const CYAN_START: usize = YELLOW_START + YELLOW_LEDS as usize;

/// One of the four contiguous color zones, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Violet,
    Beige,
    Yellow,
    Cyan,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Violet, Zone::Beige, Zone::Yellow, Zone::Cyan];

    pub const fn index(self) -> usize {
        match self {
            Zone::Violet => 0,
            Zone::Beige => 1,
            Zone::Yellow => 2,
            Zone::Cyan => 3,
        }
    }

    /// Half-open LED index range covered by this zone. The cyan range
    /// runs to the end of the buffer, trailing pixel included.
    pub const fn range(self) -> (usize, usize) {
        match self {
            Zone::Violet => (VIOLET_START, BEIGE_START),
            Zone::Beige => (BEIGE_START, YELLOW_START),
            Zone::Yellow => (YELLOW_START, CYAN_START),
            Zone::Cyan => (CYAN_START, LED_COUNT),
        }
    }
}

/// A run of LEDs painted with one zone's color.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    pub zone: Zone,
    pub from: usize,
    /// Exclusive end; `from + 1` for a single pixel.
    pub to: usize,
}

const fn span(zone: Zone, from: usize, to: usize) -> Span {
    Span { zone, from, to }
}

const fn single(zone: Zone, at: usize) -> Span {
    Span { zone, from: at, to: at + 1 }
}

/// Wave phase spans: phase 0 lights the outer rings, phases 1 and 2 move
/// the lit ring inward. Indices follow the physical ring wiring, so the
/// runs are irregular.
pub(crate) const WAVE_PHASES: [&[Span]; 3] = [
    &[
        span(Zone::Violet, 0, 11),
        span(Zone::Violet, 53, 70),
        span(Zone::Violet, 74, 90),
        span(Zone::Beige, 237, 253),
        span(Zone::Yellow, 347, 369),
        span(Zone::Cyan, 420, 437),
        span(Zone::Cyan, 481, 498),
        span(Zone::Cyan, 529, LED_COUNT),
    ],
    &[
        single(Zone::Violet, 11),
        single(Zone::Violet, 72),
        single(Zone::Violet, 90),
        single(Zone::Cyan, 437),
        single(Zone::Cyan, 419),
        single(Zone::Cyan, 528),
        span(Zone::Violet, 34, 53),
        span(Zone::Violet, 92, 105),
        span(Zone::Violet, 122, 142),
        span(Zone::Beige, 209, 237),
        span(Zone::Yellow, 307, 347),
        span(Zone::Cyan, 397, 417),
        span(Zone::Cyan, 462, 481),
        span(Zone::Cyan, 513, 527),
    ],
    &[
        single(Zone::Violet, 12),
        single(Zone::Violet, 70),
        single(Zone::Violet, 91),
        single(Zone::Violet, 110),
        single(Zone::Cyan, 418),
        single(Zone::Cyan, 417),
        single(Zone::Cyan, 440),
        single(Zone::Cyan, 394),
        single(Zone::Cyan, 512),
        single(Zone::Cyan, 527),
        single(Zone::Cyan, 526),
        span(Zone::Violet, 13, 34),
        span(Zone::Violet, 105, 122),
        span(Zone::Violet, 144, 170),
        span(Zone::Beige, 170, 209),
        span(Zone::Yellow, 253, 307),
        span(Zone::Cyan, 369, 394),
        span(Zone::Cyan, 441, 462),
        span(Zone::Cyan, 498, 513),
    ],
];

/// Switch permutations: row entry `k` selects which zone range gets the
/// k-th palette color (violet, beige, yellow, cyan in that order).
pub(crate) const SWITCH_PERMUTATIONS: [[usize; 4]; 12] = [
    [0, 1, 2, 3],
    [1, 2, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 1, 2],
    [0, 2, 1, 3],
    [1, 0, 3, 2],
    [2, 0, 1, 3],
    [3, 1, 0, 2],
    [0, 3, 1, 2],
    [1, 0, 2, 3],
    [2, 3, 0, 1],
    [3, 2, 1, 0],
];

/// Race step tables. Each row is one cursor position holding the
/// (inner, middle, outer) ring LED indices for that step. Violet and cyan
/// have the same period and share a cursor.
pub(crate) const RACE_STEPS_VIOLET: [[u16; 3]; 63] = [
    [0, 92, 120],
    [1, 93, 119],
    [2, 94, 118],
    [3, 95, 117],
    [4, 96, 116],
    [5, 97, 115],
    [6, 98, 114],
    [7, 99, 113],
    [8, 100, 112],
    [9, 101, 111],
    [9, 102, 110],
    [9, 102, 109],
    [10, 103, 108],
    [10, 104, 107],
    [10, 105, 106],
    [10, 11, 12],
    [10, 11, 13],
    [10, 52, 14],
    [53, 51, 15],
    [54, 50, 16],
    [55, 49, 17],
    [56, 48, 18],
    [57, 47, 19],
    [58, 46, 20],
    [59, 45, 21],
    [60, 44, 22],
    [61, 43, 23],
    [62, 42, 24],
    [63, 41, 25],
    [64, 40, 26],
    [65, 39, 27],
    [66, 38, 28],
    [67, 37, 29],
    [68, 36, 30],
    [69, 35, 31],
    [69, 34, 32],
    [69, 34, 33],
    [70, 144, 145],
    [70, 143, 146],
    [70, 143, 147],
    [70, 142, 148],
    [71, 141, 149],
    [72, 140, 150],
    [73, 139, 151],
    [74, 138, 152],
    [75, 137, 153],
    [76, 136, 154],
    [77, 135, 155],
    [78, 134, 156],
    [79, 133, 157],
    [80, 132, 158],
    [81, 131, 159],
    [82, 130, 160],
    [83, 129, 161],
    [84, 128, 162],
    [85, 127, 163],
    [86, 126, 164],
    [87, 125, 165],
    [88, 124, 166],
    [89, 123, 167],
    [89, 122, 168],
    [89, 122, 169],
    [89, 90, 91],
];

pub(crate) const RACE_STEPS_BEIGE: [[u16; 3]; 39] = [
    [172, 210, 237],
    [173, 211, 238],
    [174, 212, 239],
    [175, 213, 240],
    [176, 214, 241],
    [177, 215, 242],
    [178, 216, 243],
    [179, 217, 244],
    [180, 218, 244],
    [181, 219, 244],
    [182, 220, 244],
    [183, 221, 244],
    [184, 221, 244],
    [185, 221, 244],
    [186, 221, 244],
    [187, 221, 244],
    [188, 221, 244],
    [189, 221, 244],
    [190, 222, 244],
    [191, 223, 244],
    [192, 224, 244],
    [193, 225, 244],
    [194, 226, 245],
    [195, 227, 246],
    [196, 228, 247],
    [197, 229, 248],
    [198, 230, 249],
    [199, 231, 250],
    [200, 232, 251],
    [201, 233, 251],
    [202, 233, 251],
    [203, 233, 251],
    [204, 234, 251],
    [205, 235, 252],
    [206, 236, 252],
    [207, 236, 252],
    [208, 236, 252],
    [170, 209, 252],
    [171, 209, 252],
];

pub(crate) const RACE_STEPS_YELLOW: [[u16; 3]; 55] = [
    [255, 308, 347],
    [256, 309, 348],
    [257, 310, 349],
    [258, 311, 350],
    [259, 312, 351],
    [260, 313, 352],
    [261, 314, 353],
    [262, 315, 354],
    [263, 316, 355],
    [264, 317, 356],
    [265, 318, 357],
    [266, 319, 357],
    [267, 320, 357],
    [268, 321, 357],
    [269, 322, 357],
    [270, 323, 357],
    [271, 324, 357],
    [272, 325, 357],
    [273, 325, 357],
    [274, 325, 357],
    [275, 325, 357],
    [276, 325, 357],
    [277, 325, 357],
    [278, 325, 357],
    [279, 325, 357],
    [280, 325, 357],
    [281, 325, 357],
    [282, 325, 357],
    [283, 326, 357],
    [284, 327, 357],
    [285, 328, 357],
    [286, 329, 357],
    [287, 330, 357],
    [288, 331, 357],
    [289, 332, 357],
    [290, 333, 358],
    [291, 334, 359],
    [292, 335, 360],
    [293, 336, 361],
    [294, 337, 362],
    [295, 338, 363],
    [296, 339, 364],
    [297, 340, 365],
    [298, 341, 366],
    [299, 342, 366],
    [300, 342, 366],
    [301, 343, 367],
    [302, 344, 367],
    [303, 344, 367],
    [304, 344, 367],
    [305, 345, 367],
    [306, 346, 368],
    [253, 307, 347],
    [254, 307, 347],
    [255, 308, 347],
];

pub(crate) const RACE_STEPS_CYAN: [[u16; 3]; 63] = [
    [539, 513, 512],
    [538, 514, 511],
    [537, 515, 510],
    [536, 516, 509],
    [535, 517, 508],
    [534, 518, 507],
    [533, 519, 506],
    [532, 520, 505],
    [531, 521, 504],
    [530, 522, 503],
    [530, 523, 502],
    [530, 523, 501],
    [529, 524, 500],
    [529, 525, 499],
    [529, 525, 498],
    [529, 528, 527],
    [529, 528, 461],
    [529, 462, 460],
    [497, 463, 459],
    [496, 464, 458],
    [495, 465, 457],
    [494, 466, 456],
    [493, 467, 455],
    [492, 468, 454],
    [491, 469, 453],
    [490, 470, 452],
    [489, 471, 451],
    [488, 472, 450],
    [487, 473, 449],
    [486, 474, 448],
    [485, 475, 447],
    [484, 476, 446],
    [483, 477, 445],
    [482, 478, 444],
    [481, 479, 443],
    [481, 480, 442],
    [481, 480, 441],
    [440, 394, 393],
    [440, 394, 392],
    [440, 395, 391],
    [439, 396, 390],
    [438, 397, 389],
    [437, 398, 388],
    [436, 399, 387],
    [435, 400, 386],
    [434, 401, 385],
    [433, 402, 384],
    [432, 403, 383],
    [431, 404, 382],
    [430, 405, 381],
    [429, 406, 380],
    [428, 407, 379],
    [427, 408, 378],
    [426, 409, 377],
    [425, 410, 376],
    [424, 411, 375],
    [423, 412, 374],
    [422, 413, 373],
    [421, 414, 372],
    [420, 415, 371],
    [420, 416, 370],
    [420, 416, 369],
    [420, 419, 418],
];
