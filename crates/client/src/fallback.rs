//! Static content bundled with the client.
//!
//! Shown whenever a content type's fetch fails or returns nothing. Records
//! use the internal API's field naming and small integer ids.

use serde_json::{json, Value};
use smilecare_core::content::ContentType;
use smilecare_core::record::ContentRecord;

/// The bundled records for a content type, in display order.
pub fn records(content_type: ContentType) -> Vec<ContentRecord> {
    let values = match content_type {
        ContentType::BlogPost => blog_posts(),
        ContentType::TeamMember => team_members(),
        ContentType::Testimonial => testimonials(),
        ContentType::Service => services(),
        ContentType::GalleryMedia => gallery(),
        ContentType::SocialMediaPost => social_media_posts(),
    };
    values
        .into_iter()
        .filter_map(ContentRecord::from_value)
        .collect()
}

fn team_members() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Dr. Elena Ciobanu",
            "roleRo": "Medic stomatolog, director medical",
            "roleRu": "Врач-стоматолог, медицинский директор",
            "roleEn": "Dentist, medical director",
            "bioRo": "Peste 15 ani de experiență în stomatologia estetică și reabilitarea orală.",
            "bioRu": "Более 15 лет опыта в эстетической стоматологии и оральной реабилитации.",
            "bioEn": "Over 15 years of experience in aesthetic dentistry and oral rehabilitation.",
            "imageUrl": "/images/team/elena-ciobanu.jpg",
            "specialties": ["Aesthetic dentistry", "Veneers"],
            "orderIndex": 1
        }),
        json!({
            "id": 2,
            "name": "Dr. Andrei Rusu",
            "roleRo": "Chirurg oral și implantolog",
            "roleRu": "Хирург-имплантолог",
            "roleEn": "Oral surgeon and implantologist",
            "bioRo": "Specializat în implantologie și augmentare osoasă.",
            "bioRu": "Специализируется на имплантологии и костной пластике.",
            "bioEn": "Specialized in implantology and bone augmentation.",
            "imageUrl": "/images/team/andrei-rusu.jpg",
            "specialties": ["Implantology", "Oral surgery"],
            "orderIndex": 2
        }),
        json!({
            "id": 3,
            "name": "Dr. Natalia Popescu",
            "roleRo": "Ortodont",
            "roleRu": "Ортодонт",
            "roleEn": "Orthodontist",
            "bioRo": "Tratamente ortodontice cu aparate fixe și alignere transparente.",
            "bioRu": "Ортодонтическое лечение брекетами и прозрачными элайнерами.",
            "bioEn": "Orthodontic treatment with braces and clear aligners.",
            "imageUrl": "/images/team/natalia-popescu.jpg",
            "specialties": ["Orthodontics", "Clear aligners"],
            "orderIndex": 3
        }),
        json!({
            "id": 4,
            "name": "Dr. Victor Moraru",
            "roleRo": "Endodont",
            "roleRu": "Эндодонт",
            "roleEn": "Endodontist",
            "bioRo": "Tratamente de canal sub microscop.",
            "bioRu": "Лечение каналов под микроскопом.",
            "bioEn": "Microscope-assisted root canal treatment.",
            "imageUrl": "/images/team/victor-moraru.jpg",
            "specialties": ["Endodontics"],
            "orderIndex": 4
        }),
        json!({
            "id": 5,
            "name": "Dr. Irina Lungu",
            "roleRo": "Medic stomatolog pediatru",
            "roleRu": "Детский стоматолог",
            "roleEn": "Pediatric dentist",
            "bioRo": "Îngrijire dentară blândă pentru cei mici.",
            "bioRu": "Бережное лечение зубов для самых маленьких.",
            "bioEn": "Gentle dental care for the little ones.",
            "imageUrl": "/images/team/irina-lungu.jpg",
            "specialties": ["Pediatric dentistry", "Prevention"],
            "orderIndex": 5
        }),
        json!({
            "id": 6,
            "name": "Dr. Mihai Ceban",
            "roleRo": "Protetician",
            "roleRu": "Стоматолог-ортопед",
            "roleEn": "Prosthodontist",
            "bioRo": "Coroane, punți și proteze pe implanturi.",
            "bioRu": "Коронки, мосты и протезы на имплантах.",
            "bioEn": "Crowns, bridges and implant-supported dentures.",
            "imageUrl": "/images/team/mihai-ceban.jpg",
            "specialties": ["Prosthodontics", "Crowns"],
            "orderIndex": 6
        }),
    ]
}

fn blog_posts() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "titleRo": "Cum să-ți păstrezi zâmbetul alb",
            "titleRu": "Как сохранить белоснежную улыбку",
            "titleEn": "How to keep your smile white",
            "excerptRo": "Sfaturi simple pentru îngrijirea zilnică după albire.",
            "excerptRu": "Простые советы по ежедневному уходу после отбеливания.",
            "excerptEn": "Simple daily care tips after whitening.",
            "contentRo": "Evitați cafeaua și vinul roșu în primele 48 de ore după albire.",
            "contentRu": "Избегайте кофе и красного вина в первые 48 часов после отбеливания.",
            "contentEn": "Avoid coffee and red wine for the first 48 hours after whitening.",
            "imageUrl": "/images/blog/whitening.jpg",
            "author": "Dr. Elena Ciobanu",
            "category": "Aesthetics",
            "publishedAt": "2024-03-12T09:00:00Z"
        }),
        json!({
            "id": 2,
            "titleRo": "Implantul dentar pas cu pas",
            "titleRu": "Зубной имплант шаг за шагом",
            "titleEn": "Dental implants step by step",
            "excerptRo": "Ce se întâmplă la fiecare etapă a tratamentului.",
            "excerptRu": "Что происходит на каждом этапе лечения.",
            "excerptEn": "What happens at every stage of the treatment.",
            "contentRo": "De la consultație și tomografie până la coroana finală.",
            "contentRu": "От консультации и томографии до финальной коронки.",
            "contentEn": "From consultation and CT scan to the final crown.",
            "imageUrl": "/images/blog/implants.jpg",
            "author": "Dr. Andrei Rusu",
            "category": "Implantology",
            "publishedAt": "2024-04-02T09:00:00Z"
        }),
        json!({
            "id": 3,
            "titleRo": "Prima vizită a copilului la stomatolog",
            "titleRu": "Первый визит ребёнка к стоматологу",
            "titleEn": "Your child's first dental visit",
            "excerptRo": "Cum pregătiți copilul pentru o experiență fără stres.",
            "excerptRu": "Как подготовить ребёнка к визиту без стресса.",
            "excerptEn": "How to prepare your child for a stress-free visit.",
            "contentRo": "Vorbiți despre vizită ca despre o aventură, nu ca despre o obligație.",
            "contentRu": "Рассказывайте о визите как о приключении, а не как об обязанности.",
            "contentEn": "Talk about the visit as an adventure, not a chore.",
            "imageUrl": "/images/blog/kids.jpg",
            "author": "Dr. Irina Lungu",
            "category": "Pediatrics",
            "publishedAt": "2024-05-20T09:00:00Z"
        }),
    ]
}

fn testimonials() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "patientName": "Maria S.",
            "contentRo": "Personal minunat, tratament fără durere. Recomand cu încredere!",
            "contentRu": "Замечательный персонал, лечение без боли. Рекомендую!",
            "contentEn": "Wonderful staff, painless treatment. Highly recommended!",
            "rating": 5,
            "treatment": "Whitening"
        }),
        json!({
            "id": 2,
            "patientName": "Igor P.",
            "contentRo": "Implantul arată și se simte ca un dinte natural.",
            "contentRu": "Имплант выглядит и ощущается как родной зуб.",
            "contentEn": "The implant looks and feels like a natural tooth.",
            "rating": 5,
            "treatment": "Implants"
        }),
        json!({
            "id": 3,
            "patientName": "Ana C.",
            "contentRo": "Copilul meu abia așteaptă următoarea vizită.",
            "contentRu": "Мой ребёнок ждёт следующего визита.",
            "contentEn": "My child can't wait for the next visit.",
            "rating": 5,
            "treatment": "Pediatric dentistry"
        }),
    ]
}

fn services() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "titleRo": "Implantologie",
            "titleRu": "Имплантология",
            "titleEn": "Implantology",
            "descriptionRo": "Restaurarea dinților lipsă cu implanturi de titan.",
            "descriptionRu": "Восстановление утраченных зубов титановыми имплантами.",
            "descriptionEn": "Replacing missing teeth with titanium implants.",
            "icon": "implant",
            "features": ["Consultație și tomografie 3D", "Implanturi premium", "Garanție 10 ani"],
            "translations": {
                "ru": {"features": ["Консультация и 3D-томография", "Премиальные импланты", "Гарантия 10 лет"]},
                "en": {"features": ["Consultation and 3D scan", "Premium implants", "10-year warranty"]}
            },
            "orderIndex": 1
        }),
        json!({
            "id": 2,
            "titleRo": "Ortodonție",
            "titleRu": "Ортодонтия",
            "titleEn": "Orthodontics",
            "descriptionRo": "Aparate dentare și alignere pentru un zâmbet aliniat.",
            "descriptionRu": "Брекеты и элайнеры для ровной улыбки.",
            "descriptionEn": "Braces and aligners for a straight smile.",
            "icon": "braces",
            "features": ["Aparate metalice și ceramice", "Alignere transparente"],
            "translations": {
                "ru": {"features": ["Металлические и керамические брекеты", "Прозрачные элайнеры"]},
                "en": {"features": ["Metal and ceramic braces", "Clear aligners"]}
            },
            "orderIndex": 2
        }),
        json!({
            "id": 3,
            "titleRo": "Estetică dentară",
            "titleRu": "Эстетическая стоматология",
            "titleEn": "Aesthetic dentistry",
            "descriptionRo": "Albire profesională și fațete ceramice.",
            "descriptionRu": "Профессиональное отбеливание и керамические виниры.",
            "descriptionEn": "Professional whitening and ceramic veneers.",
            "icon": "sparkle",
            "features": ["Albire profesională", "Fațete ceramice"],
            "translations": {
                "ru": {"features": ["Профессиональное отбеливание", "Керамические виниры"]},
                "en": {"features": ["Professional whitening", "Ceramic veneers"]}
            },
            "orderIndex": 3
        }),
        json!({
            "id": 4,
            "titleRo": "Stomatologie pediatrică",
            "titleRu": "Детская стоматология",
            "titleEn": "Pediatric dentistry",
            "descriptionRo": "Prevenție și tratament blând pentru copii.",
            "descriptionRu": "Профилактика и бережное лечение для детей.",
            "descriptionEn": "Prevention and gentle treatment for children.",
            "icon": "child",
            "features": ["Sigilări", "Fluorizare", "Tratamente fără durere"],
            "translations": {
                "ru": {"features": ["Герметизация фиссур", "Фторирование", "Безболезненное лечение"]},
                "en": {"features": ["Sealants", "Fluoride treatment", "Painless care"]}
            },
            "orderIndex": 4
        }),
    ]
}

fn gallery() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "titleRo": "Albire profesională",
            "titleRu": "Профессиональное отбеливание",
            "titleEn": "Professional whitening",
            "descriptionRo": "Rezultat după o singură ședință.",
            "descriptionRu": "Результат после одного сеанса.",
            "descriptionEn": "Result after a single session.",
            "beforeImage": "/images/gallery/whitening-before.jpg",
            "afterImage": "/images/gallery/whitening-after.jpg",
            "displayOrder": 1
        }),
        json!({
            "id": 2,
            "titleRo": "Fațete ceramice",
            "titleRu": "Керамические виниры",
            "titleEn": "Ceramic veneers",
            "descriptionRo": "Zâmbet refăcut cu 8 fațete.",
            "descriptionRu": "Улыбка восстановлена 8 винирами.",
            "descriptionEn": "Smile restored with 8 veneers.",
            "beforeImage": "/images/gallery/veneers-before.jpg",
            "afterImage": "/images/gallery/veneers-after.jpg",
            "displayOrder": 2
        }),
        json!({
            "id": 3,
            "titleRo": "Tratament ortodontic",
            "titleRu": "Ортодонтическое лечение",
            "titleEn": "Orthodontic treatment",
            "descriptionRo": "Alinierea dinților în 14 luni.",
            "descriptionRu": "Выравнивание зубов за 14 месяцев.",
            "descriptionEn": "Teeth aligned in 14 months.",
            "beforeImage": "/images/gallery/ortho-before.jpg",
            "afterImage": "/images/gallery/ortho-after.jpg",
            "displayOrder": 3
        }),
    ]
}

fn social_media_posts() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "platform": "instagram",
            "url": "https://www.instagram.com/smilecare.md/",
            "thumbnailUrl": "/images/social/instagram-1.jpg",
            "captionRo": "Zâmbete noi în fiecare zi",
            "captionRu": "Новые улыбки каждый день",
            "captionEn": "New smiles every day",
            "displayOrder": 1
        }),
        json!({
            "id": 2,
            "platform": "tiktok",
            "url": "https://www.tiktok.com/@smilecare.md",
            "thumbnailUrl": "/images/social/tiktok-1.jpg",
            "captionRo": "O zi în clinica noastră",
            "captionRu": "Один день в нашей клинике",
            "captionEn": "A day at our clinic",
            "displayOrder": 2
        }),
        json!({
            "id": 3,
            "platform": "instagram",
            "url": "https://www.instagram.com/smilecare.md/reels/",
            "thumbnailUrl": "/images/social/instagram-2.jpg",
            "captionRo": "Înainte și după",
            "captionRu": "До и после",
            "captionEn": "Before and after",
            "displayOrder": 3
        }),
    ]
}

#[cfg(test)]
mod tests {
    use smilecare_core::language::LanguageCode;

    use super::*;

    #[test]
    fn bundled_counts() {
        let count = |t| records(t).len();
        assert_eq!(count(ContentType::TeamMember), 6);
        assert_eq!(count(ContentType::BlogPost), 3);
        assert_eq!(count(ContentType::Testimonial), 3);
        assert_eq!(count(ContentType::Service), 4);
        assert_eq!(count(ContentType::GalleryMedia), 3);
        assert_eq!(count(ContentType::SocialMediaPost), 3);
    }

    #[test]
    fn every_record_has_an_id() {
        for content_type in ContentType::ALL {
            assert!(
                records(content_type).iter().all(|r| r.id().is_some()),
                "{content_type} record without id"
            );
        }
    }

    #[test]
    fn records_are_trilingual() {
        let services = records(ContentType::Service);
        for lang in LanguageCode::ALL {
            assert!(services.iter().all(|s| !s.text("title", lang, "").is_empty()));
            assert!(services.iter().all(|s| !s.list("features", lang).is_empty()));
        }
        assert_eq!(
            services[0].list("features", LanguageCode::En)[2],
            "10-year warranty"
        );
    }
}
