//! End-to-end document clustering: vectorize, cluster, label, summarize.

use corral::{cluster_documents, DocumentClustering};

fn main() {
    let docs = vec![
        // Sports
        "The team won the league after a tense final match. The score stayed level until the striker settled it.",
        "Basketball season tips off next week and every player on the roster looks sharp after training camp.",
        "The championship game drew a record crowd. Fans celebrated as the coach lifted the trophy.",
        // Cooking
        "Preheat the oven and whisk the butter with sugar. Fold in the flour and bake the dough for twenty minutes.",
        "This recipe simmers garlic and onion in olive oil before the sauce reduces over low heat.",
        "Season the skillet vegetables with pepper, then roast them until the edges caramelize.",
        // Databases
        "The database migration added an index on the orders table and rewrote the slowest query.",
        "Our replication setup streams every transaction to a standby server for failover.",
        "Sharding the schema across nodes kept cache hit rates stable under peak load.",
    ];

    let clustering = cluster_documents(&docs, Some(42)).unwrap();
    let DocumentClustering { result, summaries } = &clustering;

    println!("=== selection ===");
    println!("  algorithm:  {}", result.algorithm);
    println!("  silhouette: {:.4}", result.silhouette);
    println!("  params:     {:?}", result.params);

    for summary in summaries {
        println!("\n=== cluster {}: {} ({} documents) ===", summary.id, summary.label, summary.size);
        println!("  coherence: {:.4}", summary.coherence);
        println!("  top terms: {}", summary.top_terms.join(", "));
        for &i in &result.clusters[&summary.id] {
            let preview: String = docs[i].chars().take(48).collect();
            println!("    [{}] {}...", i, preview);
        }
    }

    println!("\n=== json ===");
    println!("{}", serde_json::to_string_pretty(&clustering).unwrap());
}
