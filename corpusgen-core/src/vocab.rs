use std::collections::HashSet;

/// Terms shared by every generated file. Order matters: it is the order in
/// which the words appear in the template sentence. Some entries repeat.
pub const COMMON_WORDS: &[&str] = &[
    "inteligencia", "artificial", "algoritmo", "modelo", "datos", "informacion",
    "aprendizaje", "automatico", "sistema", "tecnologia", "proceso", "computadora",
    "prediccion", "analisis", "representacion", "entrada", "salida", "clasificacion",
    "regresion", "cluster", "conjunto", "parametro", "variable", "entrenamiento", "prueba",
    "optimizacion", "funcion", "objetivo", "error", "evaluacion", "validacion",
    "generalizacion", "convergencia", "ajuste", "pesos", "neuronas", "red", "capa",
    "filtro", "caracteristicas", "texto", "imagen", "voz", "traduccion", "reconocimiento",
    "patrones", "estimacion", "proceso", "complejidad", "tiempo", "memoria", "reduccion",
    "dimension", "hipotesis", "predicciones", "conjunto", "precision", "recall", "f1",
    "metrica", "probabilidad", "inferencia", "distribucion", "normal", "gaussiana",
    "lineal", "no_lineal", "entropia", "mutua", "gradiente", "descenso", "backpropagation",
    "regularizacion", "l1", "l2", "overfitting", "underfitting", "modelo", "ensemble",
    "bosque", "aleatorio", "boosting", "bagging", "kmeans", "svm", "naive", "bayes",
    "transformada", "fourier", "pca", "tsne", "token", "frecuencia", "tfidf", "distancia",
    "coseno", "euclidea", "manhattan", "hamming",
];

pub const VISION_WORDS: &[&str] = &[
    "vision", "imagen", "segmentacion", "deteccion", "rostro", "objeto", "borde", "filtro",
    "color", "forma", "contraste", "umbral", "patron", "ruido", "resolucion", "matriz",
    "pixeles", "entrenado", "camara", "video", "flujo", "mapa", "calor", "histograma",
    "saturacion", "brillo", "profundidad", "esquinas", "gradiente", "contorno",
    "movimiento", "frame", "clip", "fps", "reconstruccion", "escalar", "zoom", "rotacion",
    "transformacion",
];

pub const LANGUAGE_WORDS: &[&str] = &[
    "texto", "documento", "palabra", "frecuencia", "ngrama", "simbolo", "caracter",
    "lenguaje", "gramatica", "sintaxis", "semantica", "vector", "significado", "lectura",
    "escritura", "traduccion", "resumen", "noticia", "revision", "dialogo", "chatbot",
    "respuestas", "pregunta", "titulo", "contenido", "expresion", "literal", "parafrasis",
    "resena", "parrafo", "tema", "categoria", "indice", "corpus", "vocabulario", "frase",
    "segmento", "subtitulo", "encabezado",
];

pub const AUDIO_WORDS: &[&str] = &[
    "sonido", "onda", "frecuencia", "audio", "melodia", "voz", "habla", "microfono",
    "grabacion", "tono", "ritmo", "velocidad", "reconocimiento", "sintesis", "ruido",
    "formante", "fonema", "acustica", "pitch", "armonia", "compresion", "mezcla",
    "ecualizador", "banda", "filtro", "senal", "amplitud", "sampleo", "digital",
    "analogica", "modulacion", "distorsion", "canal", "bitrate", "buffer", "paquete",
    "latencia", "auricular", "streaming",
];

pub const ROBOTICS_WORDS: &[&str] = &[
    "robot", "sensor", "actuador", "movimiento", "trayectoria", "control", "bateria",
    "motor", "rueda", "direccion", "velocidad", "giroscopio", "entorno", "navegacion",
    "mapa", "localizacion", "obstaculo", "evitacion", "camara", "vision", "profundidad",
    "servo", "pinza", "brazo", "humanoide", "movil", "deteccion", "colision", "algoritmo",
    "busqueda", "trayectoria", "comando", "sensorial", "resolucion", "feedback",
    "posicion", "coordenada", "angulo", "robotica",
];

pub const BIOLOGY_WORDS: &[&str] = &[
    "biologia", "genoma", "celula", "proteina", "adn", "arn", "enzima", "mutacion",
    "estructura", "funcion", "organismo", "microbio", "bacteria", "virus", "sistema",
    "inmune", "respuesta", "sintoma", "vacuna", "infeccion", "anticuerpo", "diagnostico",
    "prueba", "terapia", "tratamiento", "medicina", "hospital", "salud", "genetico",
    "herencia", "biomarcador", "patologia", "muestra", "biopsia", "epidemiologia",
    "contagio", "epidemia", "genetico", "bioinformatica",
];

/// A named extra vocabulary; each one seeds exactly one output file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

/// Topics in output-file order (`text_clean_1_*` is vision, and so on).
pub const TOPICS: [Topic; 5] = [
    Topic { name: "vision", words: VISION_WORDS },
    Topic { name: "language", words: LANGUAGE_WORDS },
    Topic { name: "audio", words: AUDIO_WORDS },
    Topic { name: "robotics", words: ROBOTICS_WORDS },
    Topic { name: "biology", words: BIOLOGY_WORDS },
];

/// Number of distinct entries across `common` and every topic, compared
/// exactly as stored.
pub fn unique_word_count(common: &[&str], topics: &[Topic]) -> usize {
    let mut seen: HashSet<&str> = common.iter().copied().collect();
    for t in topics {
        seen.extend(t.words.iter().copied());
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shapes() {
        assert_eq!(COMMON_WORDS.len(), 99);
        for t in &TOPICS {
            assert_eq!(t.words.len(), 39, "topic {}", t.name);
        }
    }

    #[test]
    fn distinct_words_across_all_tables() {
        assert_eq!(unique_word_count(COMMON_WORDS, &TOPICS), 266);
    }

    #[test]
    fn count_is_case_and_accent_sensitive() {
        let extra = Topic {
            name: "t",
            words: &["Datos", "información", "informacion", "datos"],
        };
        assert_eq!(unique_word_count(&["datos"], &[extra]), 4);
    }

    #[test]
    fn count_matches_manual_union() {
        let a = Topic { name: "a", words: &["x", "y"] };
        let b = Topic { name: "b", words: &["y", "z"] };
        assert_eq!(unique_word_count(&["w", "x", "x"], &[a, b]), 4);
        assert_eq!(unique_word_count(&[], &[]), 0);
    }
}
