use crate::domain::{Category, Product};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    price: u64,
    original_price: Option<u64>,
    category: Category,
    image: &'static str,
    description: &'static str,
    stock: u32,
    rating: f32,
    reviews: u32,
    is_new: Option<bool>,
}

const SEED: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "প্রিমিয়াম কটন পাঞ্জাবি",
        price: 1250,
        original_price: Some(1800),
        category: Category::Panjabi,
        image: "https://picsum.photos/seed/panjabi1/400/400",
        description: "ঈদের জন্য স্পেশাল প্রিমিয়াম কটন পাঞ্জাবি। আরামদায়ক এবং স্টাইলিশ।",
        stock: 50,
        rating: 4.5,
        reviews: 12,
        is_new: Some(true),
    },
    SeedProduct {
        id: "2",
        name: "জামদানি শাড়ি - লাল",
        price: 3500,
        original_price: Some(4500),
        category: Category::Saree,
        image: "https://picsum.photos/seed/saree1/400/400",
        description: "হাতে বোনা অরিজিনাল ঢাকাই জামদানি শাড়ি।",
        stock: 20,
        rating: 4.8,
        reviews: 25,
        is_new: None,
    },
    SeedProduct {
        id: "3",
        name: "স্মার্ট ওয়াচ T500",
        price: 850,
        original_price: Some(1200),
        category: Category::Watch,
        image: "https://picsum.photos/seed/watch1/400/400",
        description: "ব্লুটুথ কলিং ফিচার সহ স্মার্ট ওয়াচ।",
        stock: 100,
        rating: 4.2,
        reviews: 56,
        is_new: None,
    },
    SeedProduct {
        id: "4",
        name: "আইফোন ১৪ প্রো ম্যাক্স (রেপ্লিকা)",
        price: 15000,
        original_price: None,
        category: Category::Mobile,
        image: "https://picsum.photos/seed/phone1/400/400",
        description: "ফার্স্ট কপি, দেখতে হুবহু অরিজিনালের মতো।",
        stock: 10,
        rating: 3.9,
        reviews: 5,
        is_new: None,
    },
    SeedProduct {
        id: "5",
        name: "ওয়্যারলেস হেডফোন",
        price: 1200,
        original_price: None,
        category: Category::Electronics,
        image: "https://picsum.photos/seed/headphone/400/400",
        description: "নয়েজ ক্যান্সেলেশন সহ হাই কোয়ালিটি সাউন্ড।",
        stock: 30,
        rating: 4.6,
        reviews: 89,
        is_new: None,
    },
    SeedProduct {
        id: "6",
        name: "ফেস সিরাম",
        price: 450,
        original_price: None,
        category: Category::Beauty,
        image: "https://picsum.photos/seed/beauty/400/400",
        description: "ত্বকের উজ্জ্বলতা বৃদ্ধির জন্য কার্যকরী।",
        stock: 60,
        rating: 4.7,
        reviews: 120,
        is_new: None,
    },
];

/// The catalog every store starts from. Products are not persisted, so
/// admin additions and deletions last only for the process lifetime.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            price: seed.price,
            original_price: seed.original_price,
            category: seed.category,
            image: seed.image.to_string(),
            description: seed.description.to_string(),
            stock: seed.stock,
            rating: seed.rating,
            reviews: seed.reviews,
            is_new: seed.is_new,
        })
        .collect()
}
