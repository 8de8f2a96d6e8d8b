//! Names and short readings of the 64 hexagrams.

use crate::hexagram::Hexagram;

/// Catalogue record for one hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexagramInfo {
    /// King Wen number.
    pub number: u8,
    /// English name.
    pub name: &'static str,
    /// Chinese name.
    pub hanzi: &'static str,
    /// Pinyin romanization.
    pub pinyin: &'static str,
    /// One-line reading of the hexagram, used when no corpus text is loaded.
    pub summary: &'static str,
}

const fn entry(
    number: u8,
    name: &'static str,
    hanzi: &'static str,
    pinyin: &'static str,
    summary: &'static str,
) -> HexagramInfo {
    HexagramInfo {
        number,
        name,
        hanzi,
        pinyin,
        summary,
    }
}

/// All hexagrams in King Wen order; index `n - 1` holds hexagram `n`.
#[rustfmt::skip]
pub const HEXAGRAMS: [HexagramInfo; 64] = [
    entry(
        1, "The Creative", "乾", "Qián",
        "Original strength and clear initiative: go forward with integrity.",
    ),
    entry(
        2, "The Receptive", "坤", "Kūn",
        "Fertile receptivity: follow, nourish and give form with humble constancy.",
    ),
    entry(
        3, "Difficulty at the Beginning", "屯", "Zhūn",
        "A chaotic beginning: organize, ask for help and persevere patiently.",
    ),
    entry(
        4, "Youthful Folly", "蒙", "Méng",
        "Inexperience to be taught: discipline and learning, no haste.",
    ),
    entry(
        5, "Waiting", "需", "Xū",
        "Wait in the right place: prepare and trust the proper time.",
    ),
    entry(
        6, "Conflict", "訟", "Sòng",
        "Interests diverge: clarify, avoid sterile quarrels, measure each step.",
    ),
    entry(
        7, "The Army", "師", "Shī",
        "Leading many: sober leadership, discipline and a common goal.",
    ),
    entry(
        8, "Holding Together", "比", "Bǐ",
        "Cohesion: choose sincere alliances, stay loyal and centred.",
    ),
    entry(
        9, "The Taming Power of the Small", "小畜", "Xiǎo Xù",
        "Small accumulation: hold back, tend the details, do not force.",
    ),
    entry(
        10, "Treading", "履", "Lǚ",
        "Treading delicate ground: respect, measure and good manners.",
    ),
    entry(
        11, "Peace", "泰", "Tài",
        "Heaven and earth in harmonious exchange: prosperity, openness, balance.",
    ),
    entry(
        12, "Standstill", "否", "Pǐ",
        "Blockage and closure: withdraw a little, purify, keep your integrity.",
    ),
    entry(
        13, "Fellowship with Men", "同人", "Tóng Rén",
        "Joining with equals: transparency, a shared goal, mutual trust.",
    ),
    entry(
        14, "Possession in Great Measure", "大有", "Dà Yǒu",
        "Ripe abundance: use resources well, with generosity and measure.",
    ),
    entry(
        15, "Modesty", "謙", "Qiān",
        "Quiet strength: trim excess; simplicity opens doors.",
    ),
    entry(
        16, "Enthusiasm", "豫", "Yù",
        "Prepare and motivate: rhythm, inner music, inspiring guidance.",
    ),
    entry(
        17, "Following", "隨", "Suí",
        "Follow the current: adapt, avoid self-display, stay true.",
    ),
    entry(
        18, "Work on What Has Been Spoiled", "蠱", "Gǔ",
        "Repair what was spoiled: moral cleansing, make amends for old faults.",
    ),
    entry(
        19, "Approach", "臨", "Lín",
        "Approach with goodwill: prepare the ground, take responsibility.",
    ),
    entry(
        20, "Contemplation", "觀", "Guān",
        "Look from above: set an example, clarify the vision, teach.",
    ),
    entry(
        21, "Biting Through", "噬嗑", "Shì Kè",
        "Remove the obstacle: decision, fair sanction, frankness.",
    ),
    entry(
        22, "Grace", "賁", "Bì",
        "Form and beauty: care for the essential, avoid empty appearance.",
    ),
    entry(
        23, "Splitting Apart", "剝", "Bō",
        "Decay: drop the superfluous, protect the core, withdraw.",
    ),
    entry(
        24, "Return", "復", "Fù",
        "Return to the centre: a new cycle, a small favourable movement.",
    ),
    entry(
        25, "Innocence", "無妄", "Wú Wàng",
        "Trusting simplicity: act without ulterior motives, with rectitude.",
    ),
    entry(
        26, "The Taming Power of the Great", "大畜", "Dà Xù",
        "Restrain and cultivate: store up virtue and strength, tend the inner life.",
    ),
    entry(
        27, "The Corners of the Mouth", "頤", "Yí",
        "How and what you nourish: right words and food, daily coherence.",
    ),
    entry(
        28, "Preponderance of the Great", "大過", "Dà Guò",
        "Overload: support the ridgepole, act early, avoid breaking.",
    ),
    entry(
        29, "The Abysmal", "坎", "Kǎn",
        "Recurring danger: supple tenacity, truthfulness, steer through the middle.",
    ),
    entry(
        30, "The Clinging", "離", "Lí",
        "Clarity that clings: shine with measure, hold to what is true.",
    ),
    entry(
        31, "Influence", "咸", "Xián",
        "Subtle touch: sincere attraction, respect, small initiatives.",
    ),
    entry(
        32, "Duration", "恆", "Héng",
        "Creative constancy: persevere in what is right, avoid blind rigidity.",
    ),
    entry(
        33, "Retreat", "遯", "Dùn",
        "Step back before superior force: keep your dignity, prepare the return.",
    ),
    entry(
        34, "The Power of the Great", "大壯", "Dà Zhuàng",
        "Rising power: use strength ethically, do not overwhelm.",
    ),
    entry(
        35, "Progress", "晉", "Jìn",
        "Advance into the light: recognized merit, gratitude, clarity.",
    ),
    entry(
        36, "Darkening of the Light", "明夷", "Míng Yí",
        "Wounded light: protect the inner self, act discreetly.",
    ),
    entry(
        37, "The Family", "家人", "Jiā Rén",
        "Order at home: clear roles, warmth, mutual responsibility.",
    ),
    entry(
        38, "Opposition", "睽", "Kuí",
        "Divergent views: partial agreements, respectful autonomy.",
    ),
    entry(
        39, "Obstruction", "蹇", "Jiǎn",
        "A hard obstacle: ask for help, change course, do not be stubborn.",
    ),
    entry(
        40, "Deliverance", "解", "Xiè",
        "Untie the knots: relief after strain; resume with measure.",
    ),
    entry(
        41, "Decrease", "損", "Sǔn",
        "Take away to rebalance: useful sacrifice, fertile sobriety.",
    ),
    entry(
        42, "Increase", "益", "Yì",
        "Increase the good: giving and exchange, fruitful generosity.",
    ),
    entry(
        43, "Breakthrough", "夬", "Guài",
        "A clear decision: expel what harms, speak the truth.",
    ),
    entry(
        44, "Coming to Meet", "姤", "Gòu",
        "The lesser meets the greater: caution, do not be seduced.",
    ),
    entry(
        45, "Gathering Together", "萃", "Cuì",
        "Gather people and resources: sincere invitation, organization.",
    ),
    entry(
        46, "Pushing Upward", "升", "Shēng",
        "Climb gradually: steady effort, small steps upward.",
    ),
    entry(
        47, "Oppression", "困", "Kùn",
        "Straits and fatigue: keep your dignity, seek the right support.",
    ),
    entry(
        48, "The Well", "井", "Jǐng",
        "A common source: renew it, keep the resource clean for everyone.",
    ),
    entry(
        49, "Revolution", "革", "Gé",
        "Shedding the skin: build consent, act at the exact moment.",
    ),
    entry(
        50, "The Cauldron", "鼎", "Dǐng",
        "Transform and nourish: refine, consecrate, sustain the new.",
    ),
    entry(
        51, "The Arousing", "震", "Zhèn",
        "Sudden shock: do not be swept away, respond promptly.",
    ),
    entry(
        52, "Keeping Still", "艮", "Gèn",
        "Stop: collect yourself, keep healthy limits, root in the present.",
    ),
    entry(
        53, "Development", "漸", "Jiàn",
        "Slow growth: trust the process, stability that matures.",
    ),
    entry(
        54, "The Marrying Maiden", "歸妹", "Guī Mèi",
        "Unequal commitments: measure and dignity, do not sell yourself short.",
    ),
    entry(
        55, "Abundance", "豐", "Fēng",
        "Temporary fullness: celebrate, but manage the surplus well.",
    ),
    entry(
        56, "The Wanderer", "旅", "Lǚ",
        "Away from home: clear rules, sobriety, honour your host.",
    ),
    entry(
        57, "The Gentle", "巽", "Xùn",
        "Penetrating influence: steady gentleness, persuade without forcing.",
    ),
    entry(
        58, "The Joyous", "兌", "Duì",
        "Shared joy: frank dialogue, lighten things with measure.",
    ),
    entry(
        59, "Dispersion", "渙", "Huàn",
        "Dissolve and spread: reunite hearts after the scattering.",
    ),
    entry(
        60, "Limitation", "節", "Jié",
        "Limits and rules: measure brings freedom, not blind rigidity.",
    ),
    entry(
        61, "Inner Truth", "中孚", "Zhōng Fú",
        "Trust at the centre: calm sincerity, a bridge between the parties.",
    ),
    entry(
        62, "Preponderance of the Small", "小過", "Xiǎo Guò",
        "The small in excess: caution, do not lift great burdens.",
    ),
    entry(
        63, "After Completion", "既濟", "Jì Jì",
        "Done but unstable: attention and upkeep, avoid complacency.",
    ),
    entry(
        64, "Before Completion", "未濟", "Wèi Jì",
        "Almost ready: one last effort of care, stay flexible to the end.",
    ),
];

/// Catalogue record for a hexagram.
pub fn info(hexagram: Hexagram) -> &'static HexagramInfo {
    &HEXAGRAMS[usize::from(hexagram.number() - 1)]
}

impl std::fmt::Display for HexagramInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {} ({})", self.number, self.name, self.hanzi, self.pinyin)
    }
}
