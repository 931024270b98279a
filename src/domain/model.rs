use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 商品分類（封閉集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dresses,
    Shoes,
    Accessories,
    Bags,
    Jewelry,
    Jackets,
    Tops,
    Bottoms,
    Sleepwear,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Dresses,
        Category::Shoes,
        Category::Accessories,
        Category::Bags,
        Category::Jewelry,
        Category::Jackets,
        Category::Tops,
        Category::Bottoms,
        Category::Sleepwear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dresses => "dresses",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Bags => "bags",
            Category::Jewelry => "jewelry",
            Category::Jackets => "jackets",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Sleepwear => "sleepwear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::XS, Size::S, Size::M, Size::L, Size::XL];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::XS => "XS",
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
    Red,
    Blue,
    Green,
    Yellow,
    Pink,
    Purple,
    Gold,
    Navy,
    Multi,
    Gray,
    Beige,
    Burgundy,
}

impl Color {
    pub const ALL: [Color; 14] = [
        Color::Black,
        Color::White,
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Pink,
        Color::Purple,
        Color::Gold,
        Color::Navy,
        Color::Multi,
        Color::Gray,
        Color::Beige,
        Color::Burgundy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Purple => "purple",
            Color::Gold => "gold",
            Color::Navy => "navy",
            Color::Multi => "multi",
            Color::Gray => "gray",
            Color::Beige => "beige",
            Color::Burgundy => "burgundy",
        }
    }
}

/// 排序鍵；未指定時保留目錄原始順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::PriceAsc, SortBy::PriceDesc, SortBy::RatingDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::PriceAsc => "price_asc",
            SortBy::PriceDesc => "price_desc",
            SortBy::RatingDesc => "rating_desc",
        }
    }
}

/// Parse error for the closed string enumerations above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub allowed: Vec<&'static str>,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a valid {}; expected one of: {}",
            self.value,
            self.kind,
            self.allowed.join(", ")
        )
    }
}

impl std::error::Error for UnknownVariant {}

macro_rules! impl_enum_text {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                        allowed: <$ty>::ALL.iter().map(|v| v.as_str()).collect(),
                    })
            }
        }
    };
}

impl_enum_text!(Category, "category");
impl_enum_text!(Size, "size");
impl_enum_text!(Color, "color");
impl_enum_text!(SortBy, "sort key");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FashionItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub size: Vec<Size>,
    pub color: Vec<Color>,
    pub designer: String,
    pub rating: f64,
}

/// 資料檔中的原始記錄，枚舉欄位尚未驗證
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub size: Vec<String>,
    pub color: Vec<String>,
    pub designer: String,
    pub rating: f64,
}

/// 分頁回應：`total` 為分頁前的符合筆數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub size: usize,
    pub total_pages: usize,
}
