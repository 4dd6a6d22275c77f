//! Static question catalog: 6 themed blocks of 5 questions each, plus the
//! 3-question fast-onboarding block. Question ids are stable and globally
//! unique; they never change meaning once shipped.

use super::types::{
    AssessmentMode, Block, Catalog, Choice, Language, Question, QuestionKind,
};

/// Full-assessment question count.
pub const TOTAL_QUESTIONS: usize = 30;
/// Questions per themed block.
pub const QUESTIONS_PER_BLOCK: usize = 5;
/// Themed blocks in the full assessment.
pub const TOTAL_BLOCKS: usize = 6;
/// Fast-onboarding question count.
pub const ONBOARDING_QUESTIONS: usize = 3;

/// The fixed id subset of the fast-onboarding mode. Stored progress carrying
/// any id outside this set is stripped when loading in onboarding mode.
pub const ONBOARDING_QUESTION_IDS: [&str; ONBOARDING_QUESTIONS] =
    ["business_description", "sales_status", "target_customer"];

/// Resolve the catalog for a language and mode. Pure given its inputs.
#[must_use]
pub fn catalog(language: Language, mode: AssessmentMode) -> Catalog {
    let blocks = match mode {
        AssessmentMode::Full => blocks(language),
        AssessmentMode::Onboarding => vec![onboarding_block(language)],
    };
    Catalog::new(language, mode, blocks)
}

/// The 6-block full catalog for a language.
#[must_use]
pub fn blocks(language: Language) -> Vec<Block> {
    match language {
        Language::Es => blocks_es(),
        Language::En => blocks_en(),
    }
}

/// The single fast-onboarding block for a language.
#[must_use]
pub fn onboarding_block(language: Language) -> Block {
    match language {
        Language::Es => onboarding_es(),
        Language::En => onboarding_en(),
    }
}

fn choice(id: &str, label: &str, description: &str) -> Choice {
    Choice {
        id: id.to_string(),
        label: label.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    }
}

fn question(
    id: &str,
    field_name: &str,
    kind: QuestionKind,
    prompt: &str,
    explanation: &str,
    options: Vec<Choice>,
) -> Question {
    Question {
        id: id.to_string(),
        field_name: field_name.to_string(),
        kind,
        prompt: prompt.to_string(),
        explanation: if explanation.is_empty() {
            None
        } else {
            Some(explanation.to_string())
        },
        required: true,
        options,
        visibility: None,
    }
}

fn block(
    id: &str,
    title: &str,
    subtitle: &str,
    agent_message: &str,
    strategic_context: &str,
    questions: Vec<Question>,
) -> Block {
    Block {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        agent_message: agent_message.to_string(),
        strategic_context: strategic_context.to_string(),
        questions,
    }
}

fn onboarding_es() -> Block {
    block(
        "onboarding_essentials",
        "Conoce Tu Negocio",
        "Las 3 preguntas esenciales",
        "¡Hola! Soy tu agente de crecimiento. Solo 3 preguntas para empezar. \
         Cuéntame en tus propias palabras, en primera persona.",
        "Esta información identifica tu tipo de artesanía, nivel de experiencia \
         y lo que te hace único.",
        vec![
            question(
                "business_description",
                "businessDescription",
                QuestionKind::TextWithExtraction,
                "Cuéntame sobre ti: ¿Qué haces? ¿Dónde estás? ¿Qué te hace especial?",
                "Escribe en primera persona. Incluye tu ubicación, productos, técnicas \
                 y qué te hace diferente. Mínimo 50 palabras.",
                vec![],
            ),
            question(
                "sales_status",
                "salesStatus",
                QuestionKind::SingleChoice,
                "¿Cuál es tu situación actual de ventas?",
                "Tu realidad comercial me ayuda a entender en qué etapa estás.",
                vec![
                    choice("not_yet", "Aún no he vendido", "Estoy preparándome"),
                    choice("first_sales", "He hecho mis primeras ventas", "1-5 ventas en total"),
                    choice("occasional", "Vendo ocasionalmente", "Algunas ventas al mes"),
                    choice("regular", "Vendo regularmente", "Varias ventas por semana"),
                    choice("consistent", "Vendo consistentemente", "Flujo constante de pedidos"),
                ],
            ),
            question(
                "target_customer",
                "targetCustomer",
                QuestionKind::SingleChoice,
                "¿A quién le vendes principalmente?",
                "Diferentes audiencias requieren diferentes estrategias de venta.",
                vec![
                    choice("individuals", "Personas individuales", "Gente que compra para sí misma"),
                    choice("businesses", "Tiendas o negocios", "Negocios que revenden"),
                    choice("both", "Ambos", "Vendo a personas y negocios"),
                    choice("unsure", "Aún no estoy seguro/a", "Todavía lo estoy descubriendo"),
                ],
            ),
        ],
    )
}

fn onboarding_en() -> Block {
    block(
        "onboarding_essentials",
        "Know Your Business",
        "The 3 essential questions",
        "Hello! I'm your growth agent. Just 3 questions to start. \
         Tell me in your own words, in first person.",
        "This information identifies your craft type, experience level, \
         and what makes you unique.",
        vec![
            question(
                "business_description",
                "businessDescription",
                QuestionKind::TextWithExtraction,
                "Tell me about you: What do you do? Where are you? What makes you special?",
                "Write in first person. Include your location, products, techniques, \
                 and what makes you different. Minimum 50 words.",
                vec![],
            ),
            question(
                "sales_status",
                "salesStatus",
                QuestionKind::SingleChoice,
                "What is your current sales situation?",
                "Your commercial reality helps me understand what stage you're at.",
                vec![
                    choice("not_yet", "I haven't sold yet", "I'm getting ready"),
                    choice("first_sales", "I've made my first sales", "1-5 total sales"),
                    choice("occasional", "I sell occasionally", "Some sales per month"),
                    choice("regular", "I sell regularly", "Several sales per week"),
                    choice("consistent", "I sell consistently", "Constant flow of orders"),
                ],
            ),
            question(
                "target_customer",
                "targetCustomer",
                QuestionKind::SingleChoice,
                "Who do you sell to mainly?",
                "Different audiences require different sales strategies.",
                vec![
                    choice("individuals", "Individual people", "People buying for themselves"),
                    choice("businesses", "Stores or businesses", "Businesses that resell"),
                    choice("both", "Both", "I sell to people and businesses"),
                    choice("unsure", "Not sure yet", "Still figuring it out"),
                ],
            ),
        ],
    )
}

#[allow(clippy::too_many_lines)]
fn blocks_es() -> Vec<Block> {
    vec![
        block(
            "identidad_experiencia",
            "Identidad y Experiencia Artesanal",
            "Entendiendo tu oficio y trayectoria",
            "Ahora voy a conocer más sobre tu identidad artesanal, tu experiencia y cómo trabajas.",
            "Tu nivel de experiencia y estructura de trabajo personalizan las recomendaciones.",
            vec![
                question(
                    "experience_time",
                    "experienceTime",
                    QuestionKind::SingleChoice,
                    "¿Cuánto tiempo llevas trabajando en tu oficio artesanal?",
                    "Tu experiencia me ayuda a entender tu nivel de madurez.",
                    vec![
                        choice("less_1", "Menos de 1 año", "Estoy comenzando"),
                        choice("1_3", "1-3 años", "Aún aprendiendo"),
                        choice("3_5", "3-5 años", "Con experiencia"),
                        choice("5_10", "5-10 años", "Consolidado/a"),
                        choice("more_10", "Más de 10 años", "Maestro/a artesano/a"),
                    ],
                ),
                question(
                    "work_structure",
                    "workStructure",
                    QuestionKind::SingleChoice,
                    "¿Cómo está estructurado tu trabajo?",
                    "Saber si trabajas solo/a o en equipo afina las recomendaciones.",
                    vec![
                        choice("solo", "Trabajo solo/a", "Hago todo yo mismo/a"),
                        choice("with_help", "Con ayuda ocasional", "Familiares o amigos ayudan a veces"),
                        choice("small_team", "Equipo pequeño", "2-3 personas trabajando"),
                        choice("established_team", "Equipo establecido", "4+ personas en mi taller"),
                    ],
                ),
                question(
                    "production_capacity",
                    "productionCapacity",
                    QuestionKind::SingleChoice,
                    "¿Cuántas piezas produces aproximadamente al mes?",
                    "Tu capacidad de producción refleja el tamaño de tu operación.",
                    vec![
                        choice("very_low", "1-5 piezas", "Producción muy limitada"),
                        choice("low", "6-20 piezas", "Producción pequeña"),
                        choice("medium", "21-50 piezas", "Producción mediana"),
                        choice("high", "51-100 piezas", "Producción alta"),
                        choice("very_high", "Más de 100 piezas", "Producción a escala"),
                    ],
                ),
                question(
                    "quality_control",
                    "qualityControl",
                    QuestionKind::SingleChoice,
                    "¿Cómo aseguras la calidad de tus productos?",
                    "Los procesos de calidad reflejan tu nivel de profesionalización.",
                    vec![
                        choice("intuitive", "De forma intuitiva", "Confío en mi ojo y experiencia"),
                        choice("basic_checks", "Revisiones básicas", "Reviso cada pieza antes de vender"),
                        choice("documented", "Proceso documentado", "Lista de verificación escrita"),
                        choice("systematic", "Sistema establecido", "Proceso formal de control de calidad"),
                    ],
                ),
                question(
                    "business_location",
                    "businessLocation",
                    QuestionKind::SingleChoice,
                    "¿Dónde vendes principalmente?",
                    "El lugar donde vendes determina tu estrategia de alcance.",
                    vec![
                        choice("local", "Solo en mi localidad", "Ventas en persona"),
                        choice("regional", "En mi región", "Varias ciudades cercanas"),
                        choice("national", "A nivel nacional", "Todo el país"),
                        choice("international", "Internacional", "Vendo a otros países"),
                    ],
                ),
            ],
        ),
        block(
            "ventas_monetizacion",
            "Ventas y Monetización",
            "Tu realidad comercial y sistema de precios",
            "Ahora hablemos de dinero. Es para ayudarte a mejorar tu rentabilidad.",
            "Tu sistema de precios y seguimiento financiero son clave para crecer.",
            vec![
                question(
                    "pricing_method",
                    "pricingMethod",
                    QuestionKind::SingleChoice,
                    "¿Cómo defines tus precios?",
                    "Tu método de fijación de precios impacta directamente en tu rentabilidad.",
                    vec![
                        choice("feeling", "Por intuición", "Lo que siento que vale"),
                        choice("market", "Viendo el mercado", "Me fijo en otros"),
                        choice("costs_basic", "Costos + margen básico", "Sumo mis costos y agrego algo"),
                        choice("costs_detailed", "Costos detallados", "Materiales, tiempo, overhead"),
                        choice("value_based", "Basado en valor", "Según el valor que aporto al cliente"),
                    ],
                ),
                question(
                    "profit_clarity",
                    "profitClarity",
                    QuestionKind::SingleChoice,
                    "¿Qué tan claro tienes tu margen de ganancia?",
                    "Conocer tu margen real es fundamental para tomar decisiones.",
                    vec![
                        choice("no_idea", "No tengo idea", "No llevo control"),
                        choice("rough_estimate", "Tengo una idea aproximada", "Calculo a ojo"),
                        choice("somewhat_clear", "Lo tengo más o menos claro", "Llevo algunos registros"),
                        choice("very_clear", "Lo tengo muy claro", "Llevo control detallado"),
                        choice("precise", "Calculado con precisión", "Tengo todo documentado"),
                    ],
                ),
                question(
                    "pricing_strategy",
                    "pricingStrategy",
                    QuestionKind::SingleChoice,
                    "¿Revisas y ajustas tus precios regularmente?",
                    "La flexibilidad en tus precios demuestra adaptabilidad al mercado.",
                    vec![
                        choice("never", "Nunca los cambio", "Mis precios son fijos"),
                        choice("rarely", "Rara vez", "Solo si cambian mucho los costos"),
                        choice("yearly", "Una vez al año", "Revisión anual"),
                        choice("quarterly", "Trimestralmente", "Cada 3 meses"),
                        choice("ongoing", "Constantemente", "Los ajusto según necesidad"),
                    ],
                ),
                question(
                    "financial_tracking",
                    "financialTracking",
                    QuestionKind::SingleChoice,
                    "¿Llevas registro de tus ingresos y gastos?",
                    "El control financiero es la base de un negocio sostenible.",
                    vec![
                        choice("no_tracking", "No llevo registro", "Solo en mi cabeza"),
                        choice("basic_notes", "Apuntes básicos", "Anoto lo importante"),
                        choice("spreadsheet", "En una hoja de cálculo", "Excel o Google Sheets"),
                        choice("accounting_software", "Software contable", "Uso una app especializada"),
                        choice("accountant", "Con contador/a", "Tengo soporte profesional"),
                    ],
                ),
                question(
                    "growth_goal",
                    "growthGoal",
                    QuestionKind::SingleChoice,
                    "¿Cuál es tu objetivo principal de crecimiento?",
                    "Tu objetivo guía las recomendaciones que te daré.",
                    vec![
                        choice("stable_income", "Ingresos estables", "Vivir de mi arte"),
                        choice("scale_production", "Escalar producción", "Producir y vender más"),
                        choice("premium_brand", "Marca premium", "Posicionamiento de lujo"),
                        choice("impact", "Impacto social", "Generar cambio en mi comunidad"),
                        choice("balance", "Balance vida-trabajo", "Vivir bien sin tanto estrés"),
                    ],
                ),
            ],
        ),
        block(
            "clientes_mercado",
            "Clientes y Mercado",
            "Conociendo tu audiencia y canales de venta",
            "Hablemos de tus clientes. Conocer bien a quién le vendes es clave para crecer.",
            "La claridad sobre tu audiencia y canales determina tu estrategia.",
            vec![
                question(
                    "customer_knowledge",
                    "customerKnowledge",
                    QuestionKind::SingleChoice,
                    "¿Qué tan bien conoces a tus clientes?",
                    "Conocer profundamente a tus clientes te permite servirles mejor.",
                    vec![
                        choice("dont_know", "No los conozco bien", "Solo vendo y ya"),
                        choice("basic", "Sé algunas cosas básicas", "Edad, género, ubicación"),
                        choice("good", "Los conozco bien", "Hablo con ellos regularmente"),
                        choice("very_good", "Los conozco muy bien", "Sé qué necesitan y quieren"),
                        choice("deeply", "Los conozco profundamente", "Tengo perfiles detallados"),
                    ],
                ),
                question(
                    "promotion_channels",
                    "promotionChannels",
                    QuestionKind::MultipleChoice,
                    "¿Dónde promocionas tus productos?",
                    "Tus canales de promoción determinan tu alcance actual.",
                    vec![
                        choice("word_of_mouth", "Recomendaciones", "Boca a boca"),
                        choice("instagram", "Instagram", ""),
                        choice("facebook", "Facebook", ""),
                        choice("whatsapp", "WhatsApp", ""),
                        choice("website", "Sitio web", ""),
                        choice("marketplace", "Marketplaces", "Etsy, MercadoLibre, etc."),
                        choice("fairs", "Ferias", "Eventos presenciales"),
                        choice("stores", "Tiendas físicas", "Vendo en tiendas de terceros"),
                    ],
                ),
                question(
                    "customer_feedback",
                    "customerFeedback",
                    QuestionKind::SingleChoice,
                    "¿Cómo recoges opiniones de tus clientes?",
                    "El feedback de clientes es tu mejor herramienta de mejora.",
                    vec![
                        choice("dont_ask", "No pregunto", "Espero que me digan si hay algo"),
                        choice("informal", "Conversaciones casuales", "Platico con ellos ocasionalmente"),
                        choice("after_sale", "Pregunto después de vender", "Escribo para saber cómo les fue"),
                        choice("surveys", "Encuestas", "Envío formularios estructurados"),
                        choice("systematic", "Sistema establecido", "Proceso formal de feedback"),
                    ],
                ),
                question(
                    "biggest_challenge",
                    "biggestChallenge",
                    QuestionKind::Text,
                    "¿Cuál es tu mayor desafío ahora mismo?",
                    "Tu mayor desafío me ayuda a priorizar las recomendaciones.",
                    vec![],
                ),
                question(
                    "online_presence",
                    "onlinePresence",
                    QuestionKind::MultipleChoice,
                    "¿Dónde tienes presencia online?",
                    "Tu presencia digital determina tu visibilidad y alcance.",
                    vec![
                        choice("none", "No tengo presencia online", ""),
                        choice("instagram", "Instagram", ""),
                        choice("facebook", "Facebook", ""),
                        choice("whatsapp_business", "WhatsApp Business", ""),
                        choice("own_website", "Sitio web propio", ""),
                        choice("online_store", "Tienda online", ""),
                        choice("marketplaces", "Marketplaces", "Etsy, Amazon Handmade, etc."),
                        choice("pinterest", "Pinterest", ""),
                        choice("tiktok", "TikTok", ""),
                    ],
                ),
            ],
        ),
        block(
            "marca_digital",
            "Marca y Presencia Digital",
            "Tu identidad de marca y comunicación",
            "Ahora vamos a hablar de tu marca y cómo te comunicas con el mundo.",
            "Una marca fuerte y consistente genera confianza y te diferencia.",
            vec![
                question(
                    "brand_identity",
                    "brandIdentity",
                    QuestionKind::SingleChoice,
                    "¿Tienes una identidad visual definida para tu marca?",
                    "Tu identidad visual es cómo te reconocen tus clientes.",
                    vec![
                        choice("no_brand", "No tengo marca aún", "Solo uso mi nombre"),
                        choice("name_only", "Solo nombre", "Tengo nombre pero sin diseño"),
                        choice("basic_logo", "Logo básico", "Tengo un logo simple"),
                        choice("defined_identity", "Identidad definida", "Logo, colores, tipografía"),
                        choice("complete_system", "Sistema completo", "Identidad en todos mis materiales"),
                    ],
                ),
                question(
                    "marketing_consistency",
                    "marketingConsistency",
                    QuestionKind::SingleChoice,
                    "¿Qué tan consistente es tu comunicación de marca?",
                    "La consistencia genera reconocimiento y profesionalismo.",
                    vec![
                        choice("not_consistent", "Nada consistente", "Cada publicación es diferente"),
                        choice("somewhat", "Un poco consistente", "Trato de mantener un estilo"),
                        choice("mostly", "Mayormente consistente", "Uso colores y estilo similar"),
                        choice("very", "Muy consistente", "Tengo guía de estilo"),
                        choice("always", "Siempre consistente", "Todo sigue mi identidad de marca"),
                    ],
                ),
                question(
                    "digital_tools",
                    "digitalTools",
                    QuestionKind::MultipleChoice,
                    "¿Qué herramientas digitales usas?",
                    "Las herramientas que usas determinan tu eficiencia operativa.",
                    vec![
                        choice("none", "No uso herramientas digitales", ""),
                        choice("whatsapp", "WhatsApp para ventas", ""),
                        choice("social_media", "Redes sociales", ""),
                        choice("spreadsheets", "Hojas de cálculo", ""),
                        choice("design_tools", "Herramientas de diseño", "Canva, Photoshop, etc."),
                        choice("payment_apps", "Apps de pago", "PayPal, Stripe, etc."),
                        choice("inventory", "Control de inventario", ""),
                        choice("crm", "CRM o gestión de clientes", ""),
                        choice("email_marketing", "Email marketing", ""),
                    ],
                ),
                question(
                    "product_development",
                    "productDevelopment",
                    QuestionKind::SingleChoice,
                    "¿Cómo desarrollas nuevos productos?",
                    "Tu proceso de innovación muestra tu capacidad de adaptación.",
                    vec![
                        choice("intuition", "Por intuición", "Hago lo que me gusta"),
                        choice("customer_requests", "Por pedidos", "Cuando clientes me piden algo"),
                        choice("market_observation", "Observando el mercado", "Veo qué funciona"),
                        choice("planned_testing", "Pruebas planificadas", "Hago prototipos y los pruebo"),
                        choice("systematic", "Proceso sistemático", "Investigación + desarrollo + validación"),
                    ],
                ),
                question(
                    "long_term_vision",
                    "longTermVision",
                    QuestionKind::Text,
                    "¿Dónde te ves con tu negocio en 3-5 años?",
                    "Tu visión alinea las recomendaciones con tus objetivos.",
                    vec![],
                ),
            ],
        ),
        block(
            "operaciones_crecimiento",
            "Operaciones y Crecimiento",
            "Capacidad operativa y mentalidad de crecimiento",
            "Hablemos de cómo operas y qué tan preparado/a estás para crecer.",
            "Tu capacidad operativa determina qué tan rápido puedes escalar.",
            vec![
                question(
                    "delegation_ability",
                    "delegationAbility",
                    QuestionKind::SingleChoice,
                    "¿Qué tan cómodo/a te sientes delegando tareas?",
                    "Delegar es esencial para crecer más allá de tu capacidad individual.",
                    vec![
                        choice("never", "Nunca delego", "Prefiero hacerlo todo yo"),
                        choice("rarely", "Rara vez delego", "Solo si es absolutamente necesario"),
                        choice("sometimes", "A veces delego", "Tareas sencillas"),
                        choice("often", "Delego seguido", "Cuando alguien puede hacerlo mejor"),
                        choice("always", "Delego todo lo que puedo", "Me enfoco en mi zona de genio"),
                    ],
                ),
                question(
                    "team_management",
                    "teamManagement",
                    QuestionKind::SingleChoice,
                    "¿Cómo organizas el trabajo en tu taller/negocio?",
                    "Tu sistema de organización refleja tu nivel de estructuración.",
                    vec![
                        choice("no_system", "Sin sistema", "Hago lo que surge en el momento"),
                        choice("mental_list", "Lista mental", "Lo tengo claro pero no lo escribo"),
                        choice("basic_lists", "Listas de tareas", "Anoto pendientes"),
                        choice("calendar_planning", "Planificación con calendario", "Organizo mi semana"),
                        choice("project_management", "Gestión de proyectos", "Trello, Asana, Notion"),
                    ],
                ),
                question(
                    "experimentation",
                    "experimentation",
                    QuestionKind::SingleChoice,
                    "¿Qué tan abierto/a estás a probar cosas nuevas?",
                    "La experimentación es clave para innovar y adaptarse.",
                    vec![
                        choice("never", "Prefiero no arriesgar", "Me quedo con lo conocido"),
                        choice("rarely", "Solo si es necesario", "Experimento con precaución"),
                        choice("sometimes", "De vez en cuando", "Pruebo cosas pequeñas"),
                        choice("often", "Frecuentemente", "Me gusta experimentar"),
                        choice("always", "Constantemente", "Siempre busco innovar"),
                    ],
                ),
                question(
                    "growth_timeline",
                    "growthTimeline",
                    QuestionKind::SingleChoice,
                    "¿En cuánto tiempo quieres lograr tus objetivos principales?",
                    "Tu urgencia determina la agresividad de la estrategia.",
                    vec![
                        choice("3_6_months", "3-6 meses", "Necesito resultados rápidos"),
                        choice("6_12_months", "6-12 meses", "En menos de un año"),
                        choice("1_2_years", "1-2 años", "Tengo tiempo para construir"),
                        choice("3_5_years", "3-5 años", "Visión a mediano plazo"),
                        choice("no_rush", "Sin prisa", "Voy a mi propio ritmo"),
                    ],
                ),
                question(
                    "environmental_practices",
                    "environmentalPractices",
                    QuestionKind::MultipleChoice,
                    "¿Qué prácticas sostenibles implementas?",
                    "La sostenibilidad es cada vez más valorada por los clientes.",
                    vec![
                        choice("none_yet", "Ninguna aún", "No he empezado"),
                        choice("waste_reduction", "Reducción de residuos", ""),
                        choice("recycling", "Reciclaje de materiales", ""),
                        choice("local_materials", "Materiales locales", ""),
                        choice("eco_packaging", "Empaques ecológicos", ""),
                        choice("natural_materials", "Materiales naturales", ""),
                        choice("water_conservation", "Ahorro de agua", ""),
                        choice("renewable_energy", "Energías renovables", ""),
                        choice("upcycling", "Upcycling/reutilización", ""),
                    ],
                ),
            ],
        ),
        block(
            "impacto_vision",
            "Impacto y Visión de Futuro",
            "Tu legado y contribución al mundo",
            "Finalmente, hablemos del impacto que quieres generar y tu legado artesanal.",
            "Tu propósito más allá de las ventas da sentido profundo a tu trabajo.",
            vec![
                question(
                    "social_impact",
                    "socialImpact",
                    QuestionKind::SingleChoice,
                    "¿Cómo generas impacto social con tu trabajo?",
                    "El impacto social suma valor a tu propuesta.",
                    vec![
                        choice("none_yet", "Aún no genero impacto social", "Me enfoco solo en vender"),
                        choice("employment", "Genero empleos", "Doy trabajo a otras personas"),
                        choice("skills_transfer", "Enseño mi oficio", "Capacito a otros artesanos"),
                        choice("community_support", "Apoyo a mi comunidad", "Trabajo con grupos locales"),
                        choice("preservation", "Preservo tradiciones", "Mantengo técnicas ancestrales vivas"),
                        choice("fair_trade", "Comercio justo", "Pago precios justos a proveedores"),
                    ],
                ),
                question(
                    "ethical_sourcing",
                    "ethicalSourcing",
                    QuestionKind::SingleChoice,
                    "¿Cómo obtienes tus materiales principales?",
                    "El origen de tus materiales impacta tu huella ambiental y social.",
                    vec![
                        choice("wherever", "Donde sea más barato", "Precio es lo principal"),
                        choice("local_when_possible", "Local cuando puedo", "Prefiero local pero no siempre"),
                        choice("mostly_local", "Mayormente local", "Priorizo proveedores cercanos"),
                        choice("all_local", "Todo local", "Solo compro en mi región"),
                        choice("ethical_certified", "Certificado ético", "Solo materiales certificados"),
                    ],
                ),
                question(
                    "product_customization",
                    "productCustomization",
                    QuestionKind::SingleChoice,
                    "¿Ofreces productos personalizados o hechos a medida?",
                    "La personalización puede ser una ventaja competitiva importante.",
                    vec![
                        choice("no_customization", "No, solo productos estándar", "Hago lo mismo siempre"),
                        choice("minimal", "Personalizaciones mínimas", "Pequeños cambios como colores"),
                        choice("moderate", "Personalizaciones moderadas", "Puedo adaptar varios aspectos"),
                        choice("fully_custom", "Completamente a medida", "Cada pieza es única"),
                        choice("both_lines", "Ambas líneas", "Productos estándar y personalizados"),
                    ],
                ),
                question(
                    "innovation_priority",
                    "innovationPriority",
                    QuestionKind::SingleChoice,
                    "¿Qué tan importante es la innovación en tu trabajo?",
                    "El balance entre tradición e innovación define tu estilo.",
                    vec![
                        choice("not_important", "No es importante", "Sigo la tradición"),
                        choice("somewhat", "Algo importante", "Innovación moderada"),
                        choice("important", "Importante", "Balance tradición-innovación"),
                        choice("very_important", "Muy importante", "Innovación constante"),
                        choice("critical", "Es crítica", "Mi diferenciador clave"),
                    ],
                ),
                question(
                    "artisan_legacy",
                    "artisanLegacy",
                    QuestionKind::Text,
                    "¿Qué legado quieres dejar como artesano/a?",
                    "Tu legado es tu norte, lo que da sentido a todo tu esfuerzo.",
                    vec![],
                ),
            ],
        ),
    ]
}

#[allow(clippy::too_many_lines)]
fn blocks_en() -> Vec<Block> {
    vec![
        block(
            "identidad_experiencia",
            "Craft Identity and Experience",
            "Understanding your craft and background",
            "Now I want to learn more about your craft identity, your experience, and how you work.",
            "Your experience level and work structure tailor the recommendations.",
            vec![
                question(
                    "experience_time",
                    "experienceTime",
                    QuestionKind::SingleChoice,
                    "How long have you been working in your craft?",
                    "Your experience helps me understand your maturity level.",
                    vec![
                        choice("less_1", "Less than 1 year", "Just starting"),
                        choice("1_3", "1-3 years", "Still learning"),
                        choice("3_5", "3-5 years", "Experienced"),
                        choice("5_10", "5-10 years", "Established"),
                        choice("more_10", "More than 10 years", "Master artisan"),
                    ],
                ),
                question(
                    "work_structure",
                    "workStructure",
                    QuestionKind::SingleChoice,
                    "How is your work structured?",
                    "Knowing if you work alone or in a team sharpens the recommendations.",
                    vec![
                        choice("solo", "I work alone", "I do everything myself"),
                        choice("with_help", "Occasional help", "Family or friends help sometimes"),
                        choice("small_team", "Small team", "2-3 people working"),
                        choice("established_team", "Established team", "4+ people in my workshop"),
                    ],
                ),
                question(
                    "production_capacity",
                    "productionCapacity",
                    QuestionKind::SingleChoice,
                    "How many pieces do you produce approximately per month?",
                    "Your production capacity reflects the size of your operation.",
                    vec![
                        choice("very_low", "1-5 pieces", "Very limited production"),
                        choice("low", "6-20 pieces", "Small production"),
                        choice("medium", "21-50 pieces", "Medium production"),
                        choice("high", "51-100 pieces", "High production"),
                        choice("very_high", "More than 100 pieces", "Scale production"),
                    ],
                ),
                question(
                    "quality_control",
                    "qualityControl",
                    QuestionKind::SingleChoice,
                    "How do you ensure the quality of your products?",
                    "Quality processes reflect your level of professionalism.",
                    vec![
                        choice("intuitive", "Intuitively", "I trust my eye and experience"),
                        choice("basic_checks", "Basic checks", "I check each piece before selling"),
                        choice("documented", "Documented process", "I have a written checklist"),
                        choice("systematic", "Established system", "Formal quality control process"),
                    ],
                ),
                question(
                    "business_location",
                    "businessLocation",
                    QuestionKind::SingleChoice,
                    "Where do you mainly sell?",
                    "Where you sell determines your outreach strategy.",
                    vec![
                        choice("local", "Only in my locality", "In-person sales"),
                        choice("regional", "In my region", "Several nearby cities"),
                        choice("national", "Nationally", "Across the country"),
                        choice("international", "Internationally", "I sell to other countries"),
                    ],
                ),
            ],
        ),
        block(
            "ventas_monetizacion",
            "Sales and Monetization",
            "Your commercial reality and pricing system",
            "Let's talk about money. It's to help you improve your profitability.",
            "Your pricing system and financial tracking are key to sustainable growth.",
            vec![
                question(
                    "pricing_method",
                    "pricingMethod",
                    QuestionKind::SingleChoice,
                    "How do you set your prices?",
                    "Your pricing method directly impacts your profitability.",
                    vec![
                        choice("feeling", "By intuition", "What I feel it's worth"),
                        choice("market", "Looking at the market", "I check others"),
                        choice("costs_basic", "Costs + basic margin", "I add my costs and a bit more"),
                        choice("costs_detailed", "Detailed costs", "Materials, time, overhead"),
                        choice("value_based", "Value-based", "Based on the value I provide"),
                    ],
                ),
                question(
                    "profit_clarity",
                    "profitClarity",
                    QuestionKind::SingleChoice,
                    "How clear are you about your profit margin?",
                    "Knowing your real margin is fundamental for decision making.",
                    vec![
                        choice("no_idea", "No idea", "I don't track"),
                        choice("rough_estimate", "Rough estimate", "I estimate by eye"),
                        choice("somewhat_clear", "Somewhat clear", "I keep some records"),
                        choice("very_clear", "Very clear", "I track it in detail"),
                        choice("precise", "Precisely calculated", "Everything documented"),
                    ],
                ),
                question(
                    "pricing_strategy",
                    "pricingStrategy",
                    QuestionKind::SingleChoice,
                    "Do you review and adjust your prices regularly?",
                    "Price flexibility shows adaptability to the market.",
                    vec![
                        choice("never", "Never change them", "My prices are fixed"),
                        choice("rarely", "Rarely", "Only if costs change a lot"),
                        choice("yearly", "Once a year", "Annual review"),
                        choice("quarterly", "Quarterly", "Every 3 months"),
                        choice("ongoing", "Constantly", "I adjust as needed"),
                    ],
                ),
                question(
                    "financial_tracking",
                    "financialTracking",
                    QuestionKind::SingleChoice,
                    "Do you keep track of your income and expenses?",
                    "Financial control is the foundation of a sustainable business.",
                    vec![
                        choice("no_tracking", "No tracking", "Only in my head"),
                        choice("basic_notes", "Basic notes", "I write down important things"),
                        choice("spreadsheet", "Spreadsheet", "Excel or Google Sheets"),
                        choice("accounting_software", "Accounting software", "I use a specialized app"),
                        choice("accountant", "With an accountant", "I have professional support"),
                    ],
                ),
                question(
                    "growth_goal",
                    "growthGoal",
                    QuestionKind::SingleChoice,
                    "What is your main growth goal?",
                    "Your goal guides the recommendations I will give you.",
                    vec![
                        choice("stable_income", "Stable income", "Make a living from my art"),
                        choice("scale_production", "Scale production", "Produce and sell more"),
                        choice("premium_brand", "Premium brand", "Luxury positioning"),
                        choice("impact", "Social impact", "Create change in my community"),
                        choice("balance", "Work-life balance", "Live well without too much stress"),
                    ],
                ),
            ],
        ),
        block(
            "clientes_mercado",
            "Customers and Market",
            "Knowing your audience and sales channels",
            "Let's talk about your customers. Knowing well who you sell to is key to growth.",
            "Clarity about your audience and channels determines your strategy.",
            vec![
                question(
                    "customer_knowledge",
                    "customerKnowledge",
                    QuestionKind::SingleChoice,
                    "How well do you know your customers?",
                    "Deep knowledge of your customers allows you to serve them better.",
                    vec![
                        choice("dont_know", "Don't know them well", "Just sell and that's it"),
                        choice("basic", "Some basic things", "Age, gender, location"),
                        choice("good", "Know them well", "Talk with them regularly"),
                        choice("very_good", "Know them very well", "Know what they need and want"),
                        choice("deeply", "Know them deeply", "Have detailed profiles"),
                    ],
                ),
                question(
                    "promotion_channels",
                    "promotionChannels",
                    QuestionKind::MultipleChoice,
                    "Where do you promote your products?",
                    "Your promotion channels determine your current reach.",
                    vec![
                        choice("word_of_mouth", "Word of mouth", "Referrals"),
                        choice("instagram", "Instagram", ""),
                        choice("facebook", "Facebook", ""),
                        choice("whatsapp", "WhatsApp", ""),
                        choice("website", "Website", ""),
                        choice("marketplace", "Marketplaces", "Etsy, MercadoLibre, etc."),
                        choice("fairs", "Fairs", "In-person events"),
                        choice("stores", "Physical stores", "I sell in third-party stores"),
                    ],
                ),
                question(
                    "customer_feedback",
                    "customerFeedback",
                    QuestionKind::SingleChoice,
                    "How do you collect customer feedback?",
                    "Customer feedback is your best improvement tool.",
                    vec![
                        choice("dont_ask", "I don't ask", "I wait for them to tell me"),
                        choice("informal", "Casual conversations", "I chat with them occasionally"),
                        choice("after_sale", "Ask after sale", "I write to know how it went"),
                        choice("surveys", "Surveys", "I send structured forms"),
                        choice("systematic", "Established system", "Formal feedback process"),
                    ],
                ),
                question(
                    "biggest_challenge",
                    "biggestChallenge",
                    QuestionKind::Text,
                    "What is your biggest challenge right now?",
                    "Your biggest challenge helps me prioritize recommendations.",
                    vec![],
                ),
                question(
                    "online_presence",
                    "onlinePresence",
                    QuestionKind::MultipleChoice,
                    "Where do you have an online presence?",
                    "Your digital presence determines your visibility and reach.",
                    vec![
                        choice("none", "I have no online presence", ""),
                        choice("instagram", "Instagram", ""),
                        choice("facebook", "Facebook", ""),
                        choice("whatsapp_business", "WhatsApp Business", ""),
                        choice("own_website", "Own website", ""),
                        choice("online_store", "Online store", ""),
                        choice("marketplaces", "Marketplaces", "Etsy, Amazon Handmade, etc."),
                        choice("pinterest", "Pinterest", ""),
                        choice("tiktok", "TikTok", ""),
                    ],
                ),
            ],
        ),
        block(
            "marca_digital",
            "Brand and Digital Presence",
            "Your brand identity and communication",
            "Now let's talk about your brand and how you communicate with the world.",
            "A strong and consistent brand builds trust and differentiates you.",
            vec![
                question(
                    "brand_identity",
                    "brandIdentity",
                    QuestionKind::SingleChoice,
                    "Do you have a defined visual identity for your brand?",
                    "Your visual identity is how your customers recognize you.",
                    vec![
                        choice("no_brand", "I don't have a brand yet", "I only use my name"),
                        choice("name_only", "Name only", "I have a name but no design"),
                        choice("basic_logo", "Basic logo", "I have a simple logo"),
                        choice("defined_identity", "Defined identity", "Logo, colors, typography"),
                        choice("complete_system", "Complete system", "Identity in all my materials"),
                    ],
                ),
                question(
                    "marketing_consistency",
                    "marketingConsistency",
                    QuestionKind::SingleChoice,
                    "How consistent is your brand communication?",
                    "Consistency generates recognition and professionalism.",
                    vec![
                        choice("not_consistent", "Not consistent", "Each post is different"),
                        choice("somewhat", "Somewhat consistent", "I try to maintain a style"),
                        choice("mostly", "Mostly consistent", "Similar colors and style"),
                        choice("very", "Very consistent", "I have a style guide"),
                        choice("always", "Always consistent", "Everything follows my brand identity"),
                    ],
                ),
                question(
                    "digital_tools",
                    "digitalTools",
                    QuestionKind::MultipleChoice,
                    "What digital tools do you use?",
                    "The tools you use determine your operational efficiency.",
                    vec![
                        choice("none", "I don't use digital tools", ""),
                        choice("whatsapp", "WhatsApp for sales", ""),
                        choice("social_media", "Social media", ""),
                        choice("spreadsheets", "Spreadsheets", ""),
                        choice("design_tools", "Design tools", "Canva, Photoshop, etc."),
                        choice("payment_apps", "Payment apps", "PayPal, Stripe, etc."),
                        choice("inventory", "Inventory control", ""),
                        choice("crm", "CRM or customer management", ""),
                        choice("email_marketing", "Email marketing", ""),
                    ],
                ),
                question(
                    "product_development",
                    "productDevelopment",
                    QuestionKind::SingleChoice,
                    "How do you develop new products?",
                    "Your innovation process shows your capacity to adapt.",
                    vec![
                        choice("intuition", "By intuition", "I make what I like"),
                        choice("customer_requests", "By request", "When customers ask for something"),
                        choice("market_observation", "Observing the market", "I see what works"),
                        choice("planned_testing", "Planned testing", "I prototype and test"),
                        choice("systematic", "Systematic process", "Research + development + validation"),
                    ],
                ),
                question(
                    "long_term_vision",
                    "longTermVision",
                    QuestionKind::Text,
                    "Where do you see your business in 3-5 years?",
                    "Your vision aligns the recommendations with your goals.",
                    vec![],
                ),
            ],
        ),
        block(
            "operaciones_crecimiento",
            "Operations and Growth",
            "Operational capacity and growth mindset",
            "Let's talk about how you operate and how ready you are to grow.",
            "Your operational capacity determines how fast you can scale.",
            vec![
                question(
                    "delegation_ability",
                    "delegationAbility",
                    QuestionKind::SingleChoice,
                    "How comfortable are you delegating tasks?",
                    "Delegating is essential to grow beyond your individual capacity.",
                    vec![
                        choice("never", "I never delegate", "I prefer doing everything myself"),
                        choice("rarely", "I rarely delegate", "Only if absolutely necessary"),
                        choice("sometimes", "I sometimes delegate", "Simple tasks"),
                        choice("often", "I delegate often", "When someone can do it better"),
                        choice("always", "I delegate all I can", "I focus on my zone of genius"),
                    ],
                ),
                question(
                    "team_management",
                    "teamManagement",
                    QuestionKind::SingleChoice,
                    "How do you organize the work in your workshop/business?",
                    "Your organization system reflects your level of structure.",
                    vec![
                        choice("no_system", "No system", "I do whatever comes up"),
                        choice("mental_list", "Mental list", "Clear in my head, not written"),
                        choice("basic_lists", "Task lists", "I write down to-dos"),
                        choice("calendar_planning", "Calendar planning", "I organize my week"),
                        choice("project_management", "Project management", "Trello, Asana, Notion"),
                    ],
                ),
                question(
                    "experimentation",
                    "experimentation",
                    QuestionKind::SingleChoice,
                    "How open are you to trying new things?",
                    "Experimentation is key to innovating and adapting.",
                    vec![
                        choice("never", "I prefer not to risk", "I stick with what I know"),
                        choice("rarely", "Only if necessary", "I experiment with caution"),
                        choice("sometimes", "Once in a while", "I try small things"),
                        choice("often", "Frequently", "I like experimenting"),
                        choice("always", "Constantly", "I always look to innovate"),
                    ],
                ),
                question(
                    "growth_timeline",
                    "growthTimeline",
                    QuestionKind::SingleChoice,
                    "How soon do you want to reach your main goals?",
                    "Your urgency determines how aggressive the strategy should be.",
                    vec![
                        choice("3_6_months", "3-6 months", "I need fast results"),
                        choice("6_12_months", "6-12 months", "Within a year"),
                        choice("1_2_years", "1-2 years", "I have time to build"),
                        choice("3_5_years", "3-5 years", "Medium-term vision"),
                        choice("no_rush", "No rush", "I go at my own pace"),
                    ],
                ),
                question(
                    "environmental_practices",
                    "environmentalPractices",
                    QuestionKind::MultipleChoice,
                    "What sustainable practices do you implement?",
                    "Sustainability is increasingly valued by customers.",
                    vec![
                        choice("none_yet", "None yet", "I haven't started"),
                        choice("waste_reduction", "Waste reduction", ""),
                        choice("recycling", "Material recycling", ""),
                        choice("local_materials", "Local materials", ""),
                        choice("eco_packaging", "Eco-friendly packaging", ""),
                        choice("natural_materials", "Natural materials", ""),
                        choice("water_conservation", "Water conservation", ""),
                        choice("renewable_energy", "Renewable energy", ""),
                        choice("upcycling", "Upcycling/reuse", ""),
                    ],
                ),
            ],
        ),
        block(
            "impacto_vision",
            "Impact and Future Vision",
            "Your legacy and contribution to the world",
            "Finally, let's talk about the impact you want to create and your artisan legacy.",
            "Your purpose beyond sales gives deep meaning to your work.",
            vec![
                question(
                    "social_impact",
                    "socialImpact",
                    QuestionKind::SingleChoice,
                    "How do you create social impact with your work?",
                    "Social impact adds value to your proposition.",
                    vec![
                        choice("none_yet", "No social impact yet", "I focus only on selling"),
                        choice("employment", "I create jobs", "I give work to other people"),
                        choice("skills_transfer", "I teach my craft", "I train other artisans"),
                        choice("community_support", "I support my community", "I work with local groups"),
                        choice("preservation", "I preserve traditions", "I keep ancestral techniques alive"),
                        choice("fair_trade", "Fair trade", "I pay fair prices to suppliers"),
                    ],
                ),
                question(
                    "ethical_sourcing",
                    "ethicalSourcing",
                    QuestionKind::SingleChoice,
                    "How do you source your main materials?",
                    "Where your materials come from shapes your footprint.",
                    vec![
                        choice("wherever", "Wherever is cheapest", "Price comes first"),
                        choice("local_when_possible", "Local when I can", "I prefer local but not always"),
                        choice("mostly_local", "Mostly local", "I prioritize nearby suppliers"),
                        choice("all_local", "All local", "I only buy in my region"),
                        choice("ethical_certified", "Ethically certified", "Only certified materials"),
                    ],
                ),
                question(
                    "product_customization",
                    "productCustomization",
                    QuestionKind::SingleChoice,
                    "Do you offer customized or made-to-order products?",
                    "Customization can be an important competitive advantage.",
                    vec![
                        choice("no_customization", "No, standard products only", "I always make the same"),
                        choice("minimal", "Minimal customization", "Small changes like colors"),
                        choice("moderate", "Moderate customization", "I can adapt several aspects"),
                        choice("fully_custom", "Fully made to order", "Each piece is unique"),
                        choice("both_lines", "Both lines", "Standard and custom products"),
                    ],
                ),
                question(
                    "innovation_priority",
                    "innovationPriority",
                    QuestionKind::SingleChoice,
                    "How important is innovation in your work?",
                    "The balance between tradition and innovation defines your style.",
                    vec![
                        choice("not_important", "Not important", "I follow tradition"),
                        choice("somewhat", "Somewhat important", "Moderate innovation"),
                        choice("important", "Important", "Tradition-innovation balance"),
                        choice("very_important", "Very important", "Constant innovation"),
                        choice("critical", "It's critical", "My key differentiator"),
                    ],
                ),
                question(
                    "artisan_legacy",
                    "artisanLegacy",
                    QuestionKind::Text,
                    "What legacy do you want to leave as an artisan?",
                    "Your legacy is your north star.",
                    vec![],
                ),
            ],
        ),
    ]
}
