quantity!(
    /// Money spent on charging, in euros.
    Cost, prefix: "€", precision: 2
);
