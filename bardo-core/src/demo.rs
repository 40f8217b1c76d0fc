//! # Textos de Demonstração
//!
//! Amostras de texto literário (domínio público) para exercitar o pipeline na
//! interface web e em experimentos rápidos. Cada amostra cobre um aspecto do núcleo:
//! metadados Gutenberg, contrações elididas, ênfase/referências e blocos de versos
//! para a análise de rimas.

/// Retorna pares (título, texto) de demonstração.
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Metadados Gutenberg",
            "The Project Gutenberg eBook of Shakespeare's Sonnets\n\
             This eBook is for the use of anyone anywhere in the United States.\n\
             *** START OF THE PROJECT GUTENBERG EBOOK SHAKESPEARE'S SONNETS ***\n\
             \n\
             From fairest creatures we desire increase,\n\
             That thereby beauty's rose might never die,\n\
             \n\
             *** END OF THE PROJECT GUTENBERG EBOOK SHAKESPEARE'S SONNETS ***\n\
             Updated editions will replace the previous one.",
        ),
        (
            "Contrações",
            "Speak the speech, I pray you, as I pronounc'd it to you\n\
             O'er hill, o'er dale, thorough bush, thorough brier\n\
             And all our yesterdays have lighted fools the way to dusty death, diseas'd and unperfum'd",
        ),
        (
            "Ênfase e referências",
            "Perdition catch my soul[1] but I do _love_ thee!\n\
             And when I love thee not, chaos is come again.\n\
             FOOTNOTES:\n\
             [1] Othello, act III, scene 3.",
        ),
        (
            "Rimas",
            "Double, double toil and trouble;\n\
             Fire burn and cauldron bubble.\n\
             Fillet of a fenny snake,\n\
             In the cauldron boil and bake;",
        ),
        (
            "Limiar da heurística",
            "the cat sat\n\
             upon the mat\n\
             the dog ran",
        ),
    ]
}
