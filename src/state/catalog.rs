use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Category, Ingredient, ListRule, Macros, Nutrition, Product, Recipe, RecipeList};

/// Compact row used to declare catalog recipes.
struct Row<'a> {
    id: &'a str,
    title: &'a str,
    image: &'a str,
    time: u32,
    category: Category,
    servings: u32,
    /// calories, protein, carbs, fat, fiber, sugar
    nutrition: [f64; 6],
    ingredients: &'a [(&'a str, &'a str, &'a str, &'a str)],
    instructions: &'a [&'a str],
}

impl Row<'_> {
    fn build(&self) -> Recipe {
        let [calories, protein, carbs, fat, fiber, sugar] = self.nutrition;
        Recipe {
            id: self.id.to_string(),
            title: self.title.to_string(),
            image: self.image.to_string(),
            calories,
            time: self.time,
            category: self.category,
            servings: self.servings,
            macros: Macros { carbs, protein, fat },
            ingredients: self
                .ingredients
                .iter()
                .map(|(id, name, amount, unit)| Ingredient::new(id, name, amount, unit))
                .collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            nutrition: Some(Nutrition {
                calories,
                protein,
                carbs,
                fat,
                fiber,
                sugar,
            }),
        }
    }
}

/// The built-in recipe set shown when no generated recipes are cached.
pub fn example_recipes() -> Vec<Recipe> {
    EXAMPLES.iter().map(Row::build).collect()
}

/// Extra catalog recipes offered when swapping a recipe out.
pub fn alternate_recipes() -> Vec<Recipe> {
    ALTERNATES.iter().map(Row::build).collect()
}

/// Every recipe the catalog knows about.
pub fn catalog() -> Vec<Recipe> {
    let mut all = example_recipes();
    all.extend(alternate_recipes());
    all
}

/// Pick a random catalog recipe of `category` whose id is not in `active`.
pub fn pick_replacement<R: Rng + ?Sized>(
    catalog: &[Recipe],
    active: &[Recipe],
    category: Category,
    rng: &mut R,
) -> Option<Recipe> {
    let candidates: Vec<&Recipe> = catalog
        .iter()
        .filter(|r| r.category == category)
        .filter(|r| active.iter().all(|a| a.id != r.id))
        .collect();
    candidates.choose(rng).map(|r| (*r).clone())
}

/// Curated lists shown on the home screen.
pub fn recipe_lists() -> &'static [RecipeList] {
    &RECIPE_LISTS
}

/// Look up a curated list by id.
pub fn find_list(id: &str) -> Option<&'static RecipeList> {
    RECIPE_LISTS.iter().find(|l| l.id == id)
}

/// Retailer products with known prices.
pub fn retailer_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|(retailer_id, name, quantity, price, slug)| Product {
            retailer_id: retailer_id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: *price,
            url: format!("{}/product/{}/{}", RETAILER_BASE_URL, retailer_id, slug),
        })
        .collect()
}

const RETAILER_BASE_URL: &str = "https://tienda.mercadona.es";

/// Upper bound, exclusive, for the quick recipes list.
const QUICK_MINUTES: u32 = 30;

/// Upper bound for the healthy recipes list.
const LIGHT_CALORIES: f64 = 250.0;

static RECIPE_LISTS: [RecipeList; 4] = [
    RecipeList {
        id: "semanal",
        title: "Menú Semanal",
        description: "Planifica tu semana completa",
        recipe_count: 21,
        rule: ListRule::All,
    },
    RecipeList {
        id: "rapidas",
        title: "Recetas Rápidas",
        description: "Listas en menos de 30 min",
        recipe_count: 15,
        rule: ListRule::QuickerThan(QUICK_MINUTES),
    },
    RecipeList {
        id: "saludables",
        title: "Saludables",
        description: "Bajo en calorías y nutritivo",
        recipe_count: 18,
        rule: ListRule::MaxCalories(LIGHT_CALORIES),
    },
    RecipeList {
        id: "desayunos",
        title: "Desayunos",
        description: "Empieza el día con energía",
        recipe_count: 12,
        rule: ListRule::Category(Category::Breakfast),
    },
];

/// retailer id, name, pack size, price, url slug
const PRODUCTS: [(&str, &str, &str, f64, &str); 2] = [
    ("69099", "Patatas", "1 kg", 1.50, "patatas-malla"),
    (
        "53446",
        "Salmón ahumado",
        "200 g",
        4.20,
        "salmon-marinado-hacendado-paquete",
    ),
];

const EXAMPLES: [Row<'static>; 6] = [
    Row {
        id: "example-1",
        title: "Tortilla Española",
        image: "/lovable-uploads/8530d68e-8316-44b0-8389-d319fd405949.png",
        time: 30,
        category: Category::Lunch,
        servings: 4,
        nutrition: [250.0, 12.0, 20.0, 15.0, 2.0, 1.0],
        ingredients: &[
            ("ing-1", "Patatas", "500", "g"),
            ("ing-2", "Huevos", "6", "unidades"),
            ("ing-3", "Cebolla", "1", "unidad"),
            ("ing-4", "Aceite de oliva", "100", "ml"),
            ("ing-5", "Sal", "1", "pizca"),
        ],
        instructions: &[
            "Pelar y cortar patatas",
            "Freír a fuego lento",
            "Batir huevos",
            "Mezclar y cuajar",
        ],
    },
    Row {
        id: "example-2",
        title: "Ensalada César",
        image: "/lovable-uploads/d923963b-f4fc-4381-8216-90ad753ef245.png",
        time: 15,
        category: Category::Lunch,
        servings: 2,
        nutrition: [180.0, 15.0, 10.0, 10.0, 3.0, 2.0],
        ingredients: &[
            ("ing-6", "Lechuga romana", "1", "unidad"),
            ("ing-7", "Pollo a la plancha", "200", "g"),
            ("ing-8", "Queso parmesano", "50", "g"),
            ("ing-9", "Croutons", "50", "g"),
            ("ing-10", "Salsa César", "3", "cucharadas"),
        ],
        instructions: &[
            "Lavar y cortar lechuga",
            "Cortar pollo en tiras",
            "Mezclar ingredientes",
            "Aliñar",
        ],
    },
    Row {
        id: "example-3",
        title: "Pasta Carbonara",
        image: "/lovable-uploads/7f516dd8-5753-49bd-9b5d-aa5c0bfeedd1.png",
        time: 25,
        category: Category::Dinner,
        servings: 2,
        nutrition: [450.0, 18.0, 55.0, 20.0, 2.0, 1.0],
        ingredients: &[
            ("ing-11", "Espaguetis", "200", "g"),
            ("ing-12", "Panceta", "100", "g"),
            ("ing-13", "Huevos", "2", "unidades"),
            ("ing-14", "Queso pecorino", "50", "g"),
            ("ing-15", "Pimienta negra", "1", "pizca"),
        ],
        instructions: &[
            "Cocer pasta",
            "Dorar panceta",
            "Mezclar huevos con queso",
            "Unir todo fuera del fuego",
        ],
    },
    Row {
        id: "example-4",
        title: "Tostadas con Aguacate",
        image: "/lovable-uploads/a06f3ae9-f80a-48b6-bf55-8c1b736c79f8.png",
        time: 10,
        category: Category::Breakfast,
        servings: 1,
        nutrition: [220.0, 8.0, 25.0, 12.0, 5.0, 1.0],
        ingredients: &[
            ("ing-16", "Pan integral", "2", "rebanadas"),
            ("ing-17", "Aguacate", "1", "unidad"),
            ("ing-18", "Huevo poché", "1", "unidad"),
            ("ing-19", "Sal y pimienta", "1", "pizca"),
            ("ing-20", "Semillas de sésamo", "1", "cucharada"),
        ],
        instructions: &[
            "Tostar pan",
            "Machacar aguacate",
            "Pochar huevo",
            "Montar y servir",
        ],
    },
    Row {
        id: "example-5",
        title: "Gazpacho Andaluz",
        image: "/lovable-uploads/967d027e-2a1d-40b3-b300-c73dbb88963a.png",
        time: 15,
        category: Category::Appetizer,
        servings: 4,
        nutrition: [120.0, 3.0, 12.0, 7.0, 3.0, 6.0],
        ingredients: &[
            ("ing-21", "Tomates maduros", "1", "kg"),
            ("ing-22", "Pepino", "1", "unidad"),
            ("ing-23", "Pimiento verde", "1", "unidad"),
            ("ing-24", "Ajo", "1", "diente"),
            ("ing-25", "Aceite de oliva", "50", "ml"),
        ],
        instructions: &[
            "Lavar verduras",
            "Triturar todo",
            "Añadir aceite",
            "Enfriar y servir",
        ],
    },
    Row {
        id: "example-6",
        title: "Pollo al Limón",
        image: "/lovable-uploads/71eecaf2-ff51-47ff-beef-72570cb4f960.png",
        time: 35,
        category: Category::Dinner,
        servings: 3,
        nutrition: [280.0, 35.0, 8.0, 12.0, 1.0, 2.0],
        ingredients: &[
            ("ing-26", "Pechugas de pollo", "500", "g"),
            ("ing-27", "Limones", "2", "unidades"),
            ("ing-28", "Ajo", "3", "dientes"),
            ("ing-29", "Romero fresco", "2", "ramitas"),
            ("ing-30", "Aceite de oliva", "3", "cucharadas"),
        ],
        instructions: &[
            "Marinar pollo",
            "Dorar en sartén",
            "Añadir limón",
            "Hornear 20 min",
        ],
    },
];

const ALTERNATES: [Row<'static>; 6] = [
    Row {
        id: "catalog-1",
        title: "Porridge de Avena",
        image: "",
        time: 10,
        category: Category::Breakfast,
        servings: 1,
        nutrition: [310.0, 11.0, 48.0, 8.0, 6.0, 12.0],
        ingredients: &[
            ("ing-31", "Copos de avena", "60", "g"),
            ("ing-32", "Leche", "250", "ml"),
            ("ing-33", "Plátano", "1", "unidad"),
            ("ing-34", "Canela", "1", "pizca"),
        ],
        instructions: &["Calentar leche", "Añadir avena", "Cocer 5 min", "Servir con plátano"],
    },
    Row {
        id: "catalog-2",
        title: "Lentejas Estofadas",
        image: "",
        time: 45,
        category: Category::Lunch,
        servings: 4,
        nutrition: [340.0, 21.0, 45.0, 7.0, 12.0, 4.0],
        ingredients: &[
            ("ing-35", "Lentejas pardinas", "300", "g"),
            ("ing-36", "Zanahoria", "2", "unidades"),
            ("ing-37", "Pimentón", "1", "cucharadita"),
            ("ing-38", "Laurel", "1", "hoja"),
        ],
        instructions: &["Sofreír verduras", "Añadir lentejas y agua", "Cocer 35 min"],
    },
    Row {
        id: "catalog-3",
        title: "Merluza en Salsa Verde",
        image: "",
        time: 30,
        category: Category::Dinner,
        servings: 2,
        nutrition: [260.0, 32.0, 6.0, 11.0, 1.0, 1.0],
        ingredients: &[
            ("ing-39", "Lomos de merluza", "400", "g"),
            ("ing-40", "Perejil", "1", "manojo"),
            ("ing-41", "Vino blanco", "100", "ml"),
            ("ing-42", "Almejas", "200", "g"),
        ],
        instructions: &["Picar ajo y perejil", "Ligar la salsa", "Cocinar la merluza", "Añadir almejas"],
    },
    Row {
        id: "catalog-4",
        title: "Pimientos de Padrón",
        image: "",
        time: 10,
        category: Category::Appetizer,
        servings: 2,
        nutrition: [90.0, 2.0, 6.0, 7.0, 3.0, 3.0],
        ingredients: &[
            ("ing-43", "Pimientos de Padrón", "250", "g"),
            ("ing-44", "Sal en escamas", "1", "pizca"),
        ],
        instructions: &["Freír los pimientos", "Escurrir", "Salar al servir"],
    },
    Row {
        id: "catalog-5",
        title: "Hummus con Crudités",
        image: "",
        time: 15,
        category: Category::Snacks,
        servings: 4,
        nutrition: [180.0, 7.0, 18.0, 9.0, 6.0, 3.0],
        ingredients: &[
            ("ing-45", "Garbanzos cocidos", "400", "g"),
            ("ing-46", "Tahini", "2", "cucharadas"),
            ("ing-47", "Limón", "1", "unidad"),
            ("ing-48", "Zanahoria", "2", "unidades"),
        ],
        instructions: &["Triturar garbanzos con tahini", "Añadir limón", "Cortar crudités"],
    },
    Row {
        id: "catalog-6",
        title: "Arroz con Leche",
        image: "",
        time: 50,
        category: Category::Desserts,
        servings: 6,
        nutrition: [290.0, 8.0, 50.0, 7.0, 1.0, 28.0],
        ingredients: &[
            ("ing-49", "Arroz redondo", "150", "g"),
            ("ing-50", "Leche entera", "1", "l"),
            ("ing-51", "Azúcar", "120", "g"),
            ("ing-52", "Rama de canela", "1", "unidad"),
        ],
        instructions: &["Infusionar la leche", "Cocer el arroz a fuego lento", "Añadir azúcar"],
    },
];
