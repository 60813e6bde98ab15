//! Static copy of the landing page.

pub const TAGLINE: &str = "แพลตฟอร์ม AI สำหรับการยิงโฆษณาแบบครบวงจร";

pub const HERO_TITLE: &str = "ยิงโฆษณาอย่างชาญฉลาดด้วย AI";
pub const HERO_SUBTITLE: &str = "เข้าถึงกลุ่มเป้าหมายได้แม่นยำ ประหยัดงบประมาณ เพิ่มยอดขาย";
pub const CALL_TO_ACTION: &str = "เริ่มต้นใช้งาน";

pub const FEATURES_TITLE: &str = "คุณสมบัติเด่น";

/// A card of the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "การกำหนดกลุ่มเป้าหมายด้วย AI",
        body: "ค้นหากลุ่มเป้าหมายที่เหมาะสมที่สุดสำหรับสินค้าของคุณ",
    },
    Feature {
        title: "การสร้างสรรค์โฆษณาด้วย AI",
        body: "สร้างเนื้อหาโฆษณาที่น่าสนใจและตรงกลุ่มเป้าหมาย",
    },
    Feature {
        title: "การเพิ่มประสิทธิภาพแคมเปญด้วย AI",
        body: "ปรับปรุงแคมเปญโฆษณาอัตโนมัติเพื่อผลลัพธ์ที่ดีที่สุด",
    },
    Feature {
        title: "รองรับหลายแพลตฟอร์ม",
        body: "Facebook, Instagram, TikTok, และ Shopee",
    },
];

pub const ALL_RIGHTS_RESERVED: &str = "สงวนลิขสิทธิ์.";
