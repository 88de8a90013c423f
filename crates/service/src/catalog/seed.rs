//! Fixed seed sets written by the reseed operation. Every call mints fresh ids.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::domain::{Project, Service, Testimonial};

pub fn services() -> Vec<Service> {
    [
        (
            "Diseño Personalizado",
            "Creamos exhibidores únicos adaptados a tu marca y objetivos comerciales.",
            "Palette",
            1,
        ),
        (
            "Producción Industrial",
            "Fabricación con materiales de calidad: cartón, madera, metal y acrílico.",
            "Factory",
            2,
        ),
        (
            "Implementación en PDV",
            "Logística, instalación y mantenimiento en todos tus puntos de venta.",
            "Truck",
            3,
        ),
    ]
    .into_iter()
    .map(|(title, description, icon, order)| Service {
        id: Uuid::new_v4(),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
        order,
    })
    .collect()
}

pub fn projects(now: DateTime<Utc>) -> Vec<Project> {
    [
        (
            "Display Cosmética Premium",
            "Cosmética",
            "https://images.unsplash.com/photo-1596462502278-27bfdc403348?w=400&h=300&fit=crop",
            "Exhibidor elegante para productos de belleza premium",
            true,
        ),
        (
            "Stand Bebidas Refrescantes",
            "Bebidas",
            "https://images.unsplash.com/photo-1544148103-0773bf10d330?w=400&h=300&fit=crop",
            "Display llamativo para promocionar bebidas en supermercados",
            true,
        ),
        (
            "Exhibidor Snacks Gourmet",
            "Alimentos",
            "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=400&h=300&fit=crop",
            "Punto de venta estratégico para productos alimenticios",
            true,
        ),
        (
            "Display Tecnología Móvil",
            "Retail",
            "https://images.unsplash.com/photo-1512428813834-c702c7702b67?w=400&h=300&fit=crop",
            "Exhibidor moderno para dispositivos tecnológicos",
            false,
        ),
        (
            "Stand Productos Hogar",
            "Retail",
            "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400&h=300&fit=crop",
            "Solución integral para artículos del hogar",
            false,
        ),
        (
            "Display Perfumería",
            "Cosmética",
            "https://images.unsplash.com/photo-1541643600914-78b084683601?w=400&h=300&fit=crop",
            "Exhibidor sofisticado para fragancias y perfumes",
            false,
        ),
    ]
    .into_iter()
    .map(|(title, category, image, description, featured)| Project {
        id: Uuid::new_v4(),
        title: title.into(),
        category: category.into(),
        image: image.into(),
        description: description.into(),
        created_at: now,
        featured,
    })
    .collect()
}

pub fn testimonials(now: DateTime<Utc>) -> Vec<Testimonial> {
    [
        (
            "Exhibilo transformó nuestros puntos de venta. Los exhibidores aumentaron nuestras ventas un 40%.",
            "María González",
            "Gerente de Marketing",
            "Productos Premium SA",
        ),
        (
            "Excelente calidad y cumplimiento de tiempos. Recomiendo Exhibilo sin dudas.",
            "Carlos Rodríguez",
            "Director Comercial",
            "Retail Solutions",
        ),
        (
            "El diseño 3D nos permitió visualizar exactamente lo que necesitábamos antes de producir.",
            "Ana Martínez",
            "Brand Manager",
            "Cosmética Global",
        ),
    ]
    .into_iter()
    .map(|(quote, author, position, company)| Testimonial {
        id: Uuid::new_v4(),
        quote: quote.into(),
        author: author.into(),
        position: position.into(),
        company: company.into(),
        created_at: now,
        active: true,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_sets_have_reference_sizes() {
        let now = Utc::now();
        assert_eq!(services().len(), 3);
        assert_eq!(projects(now).len(), 6);
        assert_eq!(testimonials(now).len(), 3);
        assert_eq!(projects(now).iter().filter(|p| p.category == "Cosmética").count(), 2);
    }

    #[test]
    fn ids_are_fresh_but_content_is_identical() {
        let now = Utc::now();
        let a = projects(now);
        let b = projects(now);
        let ids: HashSet<Uuid> = a.iter().chain(b.iter()).map(|p| p.id).collect();
        assert_eq!(ids.len(), 12);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!((&x.title, &x.category, x.featured), (&y.title, &y.category, y.featured));
        }
    }

    #[test]
    fn service_orders_are_distinct_and_ascending() {
        let orders: Vec<i32> = services().iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
