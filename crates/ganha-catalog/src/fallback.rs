//! Embedded product list used when the manifest is unreachable or empty.

use ganha_core::Product;

struct FallbackOffer {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    price: &'static str,
    original_price: &'static str,
    discount: &'static str,
    image_url: &'static str,
    link: &'static str,
    coupon: &'static str,
    is_popular: bool,
}

const FALLBACK_OFFERS: &[FallbackOffer] = &[
    FallbackOffer {
        category: "eletronica",
        title: "Auriculares Bluetooth com Cancelamento de Ruído",
        description: "Até 30 horas de bateria e estojo de carregamento rápido.",
        price: "49,99€",
        original_price: "99,99€",
        discount: "-50% OFF",
        image_url: "https://images.regista-ganha.pt/auriculares.jpg",
        link: "https://www.amazon.es/dp/B0AUDIO001",
        coupon: "SOM50",
        is_popular: true,
    },
    FallbackOffer {
        category: "casa-cozinha",
        title: "Fritadeira de Ar 5,5L",
        description: "Cozinha sem óleo com 8 programas automáticos.",
        price: "79,90€",
        original_price: "129,90€",
        discount: "-38% OFF",
        image_url: "https://images.regista-ganha.pt/fritadeira.jpg",
        link: "https://www.amazon.es/dp/B0FRY00002",
        coupon: "COZINHA38",
        is_popular: true,
    },
    FallbackOffer {
        category: "eletrodomesticos",
        title: "Aspirador Robô com Mapeamento",
        description: "Navegação laser e aplicação para agendar limpezas.",
        price: "1.199,00€",
        original_price: "1.499,00€",
        discount: "-20% OFF",
        image_url: "https://images.regista-ganha.pt/aspirador.jpg",
        link: "https://www.amazon.es/dp/B0ROBO0003",
        coupon: "LIMPO20",
        is_popular: false,
    },
    FallbackOffer {
        category: "saude-beleza",
        title: "Escova de Dentes Elétrica",
        description: "Sensor de pressão e 3 modos de escovagem.",
        price: "29,90€",
        original_price: "44,90€",
        discount: "-33% OFF",
        image_url: "https://images.regista-ganha.pt/escova.jpg",
        link: "https://www.amazon.es/dp/B0DENT0004",
        coupon: "SORRISO33",
        is_popular: true,
    },
    FallbackOffer {
        category: "desporto",
        title: "Garrafa Térmica 1L em Aço Inox",
        description: "Mantém bebidas frias 24h ou quentes 12h.",
        price: "14,99€",
        original_price: "19,99€",
        discount: "-25% OFF",
        image_url: "https://images.regista-ganha.pt/garrafa.jpg",
        link: "https://www.amazon.es/dp/B0AGUA0005",
        coupon: "AGUA25",
        is_popular: false,
    },
    FallbackOffer {
        category: "casa-cozinha",
        title: "Conjunto de Facas com Bloco",
        description: "Seis facas forjadas e afiador incluído.",
        price: "39,95€",
        original_price: "69,95€",
        discount: "-43% OFF",
        image_url: "https://images.regista-ganha.pt/facas.jpg",
        link: "https://www.amazon.es/dp/B0FACA0006",
        coupon: "CORTE43",
        is_popular: false,
    },
];

/// Returns the embedded fallback catalog, in curated order.
#[must_use]
pub fn fallback_products() -> Vec<Product> {
    FALLBACK_OFFERS
        .iter()
        .map(|offer| Product {
            category: offer.category.to_string(),
            title: offer.title.to_string(),
            description: offer.description.to_string(),
            price: offer.price.to_string(),
            original_price: offer.original_price.to_string(),
            discount: offer.discount.to_string(),
            image_url: offer.image_url.to_string(),
            link: offer.link.to_string(),
            coupon: offer.coupon.to_string(),
            is_popular: offer.is_popular,
        })
        .collect()
}
